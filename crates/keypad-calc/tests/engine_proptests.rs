//! Property-based tests for the calculator engine

use keypad_calc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Any key script over the full keypad
fn key_script_strategy() -> impl Strategy<Value = String> {
    "[0-9.+*/=c<-]{0,40}"
}

/// A whole number typed without a leading zero
fn operand_strategy() -> impl Strategy<Value = u32> {
    1u32..1_000_000u32
}

/// A finite decimal typed with a fractional part, e.g. `"12.05"`
fn decimal_operand_strategy(min_whole: u32) -> impl Strategy<Value = String> {
    (min_whole..10_000u32, 0u32..1000u32).prop_map(|(whole, frac)| format!("{whole}.{frac}"))
}

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn run(keys: &str) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    engine.enter_keys(keys).unwrap();
    engine
}

// ===== Display invariants =====

proptest! {
    /// The display is never blank
    #[test]
    fn prop_display_never_empty(keys in key_script_strategy()) {
        let engine = run(&keys);
        prop_assert!(!engine.display().is_empty());
    }

    /// Typed input never holds two decimal points
    #[test]
    fn prop_at_most_one_decimal_point(keys in key_script_strategy()) {
        let engine = run(&keys);
        prop_assert!(engine.display().matches('.').count() <= 1);
    }

    /// Clear resets from any reachable state
    #[test]
    fn prop_clear_from_any_state(keys in key_script_strategy()) {
        let mut engine = run(&keys);
        engine.clear();
        prop_assert_eq!(engine.display(), "0");
        prop_assert_eq!(engine.pending(), None);
        prop_assert_eq!(engine.state(), EngineState::Idle);
    }

    /// Pending operator and first operand are set together
    #[test]
    fn prop_pending_is_all_or_nothing(keys in key_script_strategy()) {
        let engine = run(&keys);
        prop_assert_eq!(engine.pending_operator().is_some(), engine.first_operand().is_some());
    }

    /// Typed digits read back verbatim
    #[test]
    fn prop_digit_entry_reproduces_input(n in operand_strategy()) {
        let typed = n.to_string();
        let engine = run(&typed);
        prop_assert_eq!(engine.display(), typed.as_str());
    }

    /// A decimal fraction reads back verbatim
    #[test]
    fn prop_decimal_entry_reproduces_input(whole in operand_strategy(), frac in 0u32..1000u32) {
        let typed = format!("{whole}.{frac}");
        let engine = run(&typed);
        prop_assert_eq!(engine.display(), typed.as_str());
    }

    /// Repeated decimal presses collapse to one
    #[test]
    fn prop_decimal_idempotent(whole in operand_strategy(), presses in 1usize..6usize) {
        let typed = format!("{whole}{}2", ".".repeat(presses));
        let engine = run(&typed);
        prop_assert_eq!(engine.display(), format!("{whole}.2"));
    }

    /// Delete undoes the last digit
    #[test]
    fn prop_delete_undoes_digit(n in operand_strategy(), d in 0u8..=9u8) {
        let mut engine = run(&n.to_string());
        engine.press(KeypadAction::Digit(d));
        engine.delete_last();
        prop_assert_eq!(engine.display(), n.to_string());
    }
}

// ===== Arithmetic =====

proptest! {
    /// a op b = shows the formatted arithmetic result
    #[test]
    fn prop_binary_operation(a in operand_strategy(), op in operator_strategy(), b in operand_strategy()) {
        let engine = run(&format!("{a}{}{b}=", op.symbol()));
        let expected = format_number(Calculator::apply(f64::from(a), f64::from(b), op).unwrap());
        prop_assert_eq!(engine.display(), expected);
        prop_assert_eq!(engine.state(), EngineState::Idle);
    }

    /// Division by zero shows "Error" whatever the dividend
    #[test]
    fn prop_division_by_zero(a in operand_strategy()) {
        let engine = run(&format!("{a}/0="));
        prop_assert_eq!(engine.display(), "Error");
    }

    /// Fractional operands go through the same arithmetic
    #[test]
    fn prop_binary_operation_decimals(
        a in decimal_operand_strategy(0),
        op in operator_strategy(),
        b in decimal_operand_strategy(1),
    ) {
        let engine = run(&format!("{a}{}{b}=", op.symbol()));
        let lhs: f64 = a.parse().unwrap();
        let rhs: f64 = b.parse().unwrap();
        let expected = format_number(Calculator::apply(lhs, rhs, op).unwrap());
        prop_assert_eq!(engine.display(), expected);
        prop_assert_eq!(engine.tape().len(), 1);
    }

    /// A chained operator equals evaluating first
    #[test]
    fn prop_chaining_is_left_to_right(
        a in operand_strategy(),
        first in operator_strategy(),
        b in 1u32..1000u32,
        second in operator_strategy(),
        c in 1u32..1000u32,
    ) {
        let chained = run(&format!("{a}{}{b}{}{c}=", first.symbol(), second.symbol()));
        let stepwise = run(&format!("{a}{}{b}={}{c}=", first.symbol(), second.symbol()));
        prop_assert_eq!(chained.display(), stepwise.display());
    }

    /// Every completed evaluation lands on the tape, within capacity
    #[test]
    fn prop_tape_bounded(keys in key_script_strategy(), capacity in 0usize..5usize) {
        let mut engine = CalculatorEngine::with_config(EngineConfig::new().with_tape_capacity(capacity));
        engine.enter_keys(&keys).unwrap();
        prop_assert!(engine.tape().len() <= capacity);
    }
}

// ===== Adapters =====

proptest! {
    /// The mock page shows exactly what the engine shows after every key
    #[test]
    fn prop_page_mirrors_engine(keys in key_script_strategy()) {
        let mut engine = CalculatorEngine::new();
        let mut page = WasmDriver::new();
        for action in parse_key_sequence(&keys).unwrap() {
            engine.press(action);
            CalculatorDriver::press(&mut page, action);
            prop_assert_eq!(engine.display(), page.display());
        }
    }
}
