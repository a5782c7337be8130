//! Property tests for the editing state machine.

use super::*;
use crate::calculator::{self, format_number, open_bracket_depth};
use proptest::prelude::*;

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        8 => prop::sample::select(vec![
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '(', ')',
        ])
        .prop_map(Action::AddInput),
        1 => Just(Action::DeleteLast),
        1 => Just(Action::Evaluate),
        1 => Just(Action::ContinueCalculation),
    ]
}

fn arb_expression() -> impl Strategy<Value = String> {
    "[0-9.+*/()-]{0,24}"
}

proptest! {
    #[test]
    fn close_brackets_never_outnumber_open(actions in prop::collection::vec(arb_action(), 0..80)) {
        let mut state = EditorState::default();
        for action in actions {
            state = transition(state, action);
            let mut depth = 0i64;
            for ch in state.expression().chars() {
                match ch {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    _ => {}
                }
                prop_assert!(depth >= 0, "expression {:?}", state.expression());
            }
            prop_assert!(open_bracket_depth(state.expression()) >= 0);
        }
    }

    #[test]
    fn evaluate_is_pure(expression in arb_expression()) {
        prop_assert_eq!(calculator::evaluate(&expression), calculator::evaluate(&expression));
    }

    #[test]
    fn history_is_bounded(capacity in 1usize..8, count in 0usize..20) {
        let options = EditorOptions { history_capacity: capacity, keep_history_on_clear: true };
        let mut state = EditorState::new(options);
        for i in 0..count {
            state = transition(state, Action::Clear);
            for ch in format!("{i}+1").chars() {
                state = transition(state, Action::AddInput(ch));
            }
            state = transition(state, Action::Evaluate);
            prop_assert!(state.history().len() <= capacity);
        }
        prop_assert_eq!(state.history().len(), count.min(capacity));
    }

    #[test]
    fn formatted_results_parse_back(actions in prop::collection::vec(arb_action(), 0..60)) {
        let mut state = EditorState::default();
        for action in actions {
            state = transition(state, action);
        }
        for entry in state.history().iter() {
            let rendered = format_number(entry.result(), usize::MAX);
            let reparsed: f64 = rendered.parse().unwrap();
            prop_assert!((reparsed - entry.result()).abs() <= 1e-6);
        }
    }

    #[test]
    fn oldest_entry_is_evicted(extra in 1usize..5) {
        let mut history = HistoryList::with_capacity(3);
        for i in 0..(3 + extra) {
            history.push(HistoryEntry::new(i.to_string(), i as f64));
        }
        let kept: Vec<f64> = history.iter().map(HistoryEntry::result).collect();
        let newest = (3 + extra - 1) as f64;
        prop_assert_eq!(kept, vec![newest, newest - 1.0, newest - 2.0]);
    }
}
