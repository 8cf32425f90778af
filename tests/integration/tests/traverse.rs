//! Read-only traversal over regjsparser ASTs.


use common::fixture;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use regwalk_ast::{Node, NodeType};
use regwalk_traverse::{
    TraverseCallbacks, TraverseState, Visitor, VisitorOption, traverse, traverse_with_state,
};
use rstest::rstest;

type HookFn = fn(&Node, &mut TraverseState) -> VisitorOption;

fn label(node: &Node) -> String {
    match node.as_char() {
        Some(c) => format!("{}({})", node.node_type, c),
        None => node.node_type.to_string(),
    }
}

/// Counts entered nodes per type and delegates control to plain hooks.
#[derive(Default)]
struct Counter {
    enter_hook: Option<HookFn>,
    leave_hook: Option<HookFn>,
    entered: Vec<NodeType>,
    left: Vec<NodeType>,
}

impl Counter {
    fn count(&self, node_type: NodeType) -> usize {
        self.entered.iter().filter(|t| **t == node_type).count()
    }

    fn count_left(&self, node_type: NodeType) -> usize {
        self.left.iter().filter(|t| **t == node_type).count()
    }
}

impl Visitor for Counter {
    fn enter(
        &mut self,
        node: &Node,
        _parent: Option<&Node>,
        state: &mut TraverseState,
    ) -> VisitorOption {
        self.entered.push(node.node_type);
        self.enter_hook
            .map_or(VisitorOption::Continue, |hook| hook(node, state))
    }

    fn leave(
        &mut self,
        node: &Node,
        _parent: Option<&Node>,
        state: &mut TraverseState,
    ) -> VisitorOption {
        self.left.push(node.node_type);
        self.leave_hook
            .map_or(VisitorOption::Continue, |hook| hook(node, state))
    }
}

fn on_class(option: VisitorOption) -> impl Fn(&Node) -> VisitorOption {
    move |node| {
        if node.is(NodeType::CharacterClass) {
            option
        } else {
            VisitorOption::Continue
        }
    }
}

fn skip_class_by_state(node: &Node, state: &mut TraverseState) -> VisitorOption {
    if node.is(NodeType::CharacterClass) {
        state.skip();
    }
    VisitorOption::Continue
}

fn skip_class_by_return(node: &Node, _state: &mut TraverseState) -> VisitorOption {
    on_class(VisitorOption::Skip)(node)
}

fn break_on_class_by_state(node: &Node, state: &mut TraverseState) -> VisitorOption {
    if node.is(NodeType::CharacterClass) {
        state.break_traversal();
    }
    VisitorOption::Continue
}

fn break_on_class_by_return(node: &Node, _state: &mut TraverseState) -> VisitorOption {
    on_class(VisitorOption::Break)(node)
}

#[test]
fn test_counts_values_in_literal_sequence() {
    let mut counter = Counter::default();
    traverse(&fixture("abc"), &mut counter);

    assert_eq!(counter.count(NodeType::Value), 3);
    assert_eq!(counter.count(NodeType::Alternative), 1);
}

#[test]
fn test_counts_disjunction_and_its_values() {
    let mut counter = Counter::default();
    traverse(&fixture("a_or_b_or_c"), &mut counter);

    assert_eq!(counter.count(NodeType::Value), 3);
    assert_eq!(counter.count(NodeType::Disjunction), 1);
    assert_eq!(counter.count_left(NodeType::Value), 3);
    assert_eq!(counter.count_left(NodeType::Disjunction), 1);
}

#[test]
fn test_range_endpoints_are_visited() {
    let mut counter = Counter::default();
    traverse(&fixture("abc_class_range_d"), &mut counter);

    assert_eq!(counter.count(NodeType::CharacterClass), 1);
    assert_eq!(counter.count(NodeType::CharacterClassRange), 1);
    assert_eq!(counter.count(NodeType::Value), 6);
    assert_eq!(counter.count_left(NodeType::Value), 6);
}

#[rstest]
#[case::skip_in_enter_by_state(Some(skip_class_by_state as HookFn), None, 4, false)]
#[case::skip_in_enter_by_return(Some(skip_class_by_return as HookFn), None, 4, false)]
#[case::skip_in_leave_has_no_effect(None, Some(skip_class_by_state as HookFn), 6, false)]
#[case::break_in_enter_by_state(Some(break_on_class_by_state as HookFn), None, 3, true)]
#[case::break_in_enter_by_return(Some(break_on_class_by_return as HookFn), None, 3, true)]
#[case::break_in_leave_by_state(None, Some(break_on_class_by_state as HookFn), 5, true)]
#[case::break_in_leave_by_return(None, Some(break_on_class_by_return as HookFn), 5, true)]
fn test_control_requests_on_character_class(
    #[case] enter_hook: Option<HookFn>,
    #[case] leave_hook: Option<HookFn>,
    #[case] expected_values: usize,
    #[case] expected_break: bool,
) {
    let mut counter = Counter {
        enter_hook,
        leave_hook,
        ..Counter::default()
    };
    let state = traverse(&fixture("abc_class_range_d"), &mut counter);

    assert_eq!(counter.count(NodeType::Value), expected_values);
    assert_eq!(state.did_call_break(), expected_break);
}

#[test]
fn test_every_entered_node_is_left_once() {
    let mut counter = Counter::default();
    traverse(&fixture("mixed"), &mut counter);

    let mut entered = counter.entered.clone();
    let mut left = counter.left.clone();
    entered.sort_by_key(NodeType::as_str);
    left.sort_by_key(NodeType::as_str);
    assert_eq!(entered, left);
    assert_eq!(counter.entered.len(), 14);
}

#[test]
fn test_skipped_node_is_still_left() {
    let mut counter = Counter {
        enter_hook: Some(skip_class_by_state),
        ..Counter::default()
    };
    traverse(&fixture("abc_class_range_d"), &mut counter);

    assert_eq!(counter.count(NodeType::CharacterClassRange), 0);
    assert!(counter.left.contains(&NodeType::CharacterClass));
    assert_eq!(counter.entered.len(), counter.left.len());
}

#[test]
fn test_skip_does_not_leak_into_siblings() {
    // Skipping the class must not hide the `d` that follows it.
    let mut chars = Vec::new();
    let mut callbacks = TraverseCallbacks::new().on_enter(|node, _, _| {
        chars.extend(node.as_char());
        on_class(VisitorOption::Skip)(node)
    });
    traverse(&fixture("abc_class_range_d"), &mut callbacks);
    drop(callbacks);

    assert_eq!(chars, vec!['a', 'b', 'c', 'd']);
}

#[test]
fn test_parent_is_passed_to_callbacks() {
    let mut pairs = Vec::new();
    let mut callbacks = TraverseCallbacks::new().on_enter(|node, parent, _| {
        if node.as_char().is_some() {
            pairs.push((label(node), parent.map(|p| p.node_type)));
        }
        VisitorOption::Continue
    });
    traverse(&fixture("abc_class_range_d"), &mut callbacks);
    drop(callbacks);

    assert_eq!(
        pairs[3],
        ("value(a)".to_string(), Some(NodeType::CharacterClassRange))
    );
    assert_eq!(pairs[5], ("value(d)".to_string(), Some(NodeType::Alternative)));
}

#[test]
fn test_root_has_no_parent() {
    let mut roots = 0;
    let mut callbacks = TraverseCallbacks::new().on_enter(|_, parent, _| {
        if parent.is_none() {
            roots += 1;
        }
        VisitorOption::Continue
    });
    traverse(&fixture("mixed"), &mut callbacks);
    drop(callbacks);

    assert_eq!(roots, 1);
}

#[test]
fn test_visit_order() {
    let mut events = Vec::new();
    let mut visitor = Recorder(&mut events);
    traverse(&fixture("mixed"), &mut visitor);

    assert_snapshot!(events.join("\n"), @r"
    enter alternative
    enter anchor
    leave anchor
    enter quantifier
    enter group
    enter disjunction
    enter value(a)
    leave value(a)
    enter dot
    leave dot
    leave disjunction
    leave group
    leave quantifier
    enter characterClassEscape
    leave characterClassEscape
    enter characterClass
    enter characterClassRange
    enter value(x)
    leave value(x)
    enter value(z)
    leave value(z)
    leave characterClassRange
    leave characterClass
    enter reference
    leave reference
    enter anchor
    leave anchor
    leave alternative
    ");
}

struct Recorder<'a>(&'a mut Vec<String>);

impl Visitor for Recorder<'_> {
    fn enter(&mut self, node: &Node, _: Option<&Node>, _: &mut TraverseState) -> VisitorOption {
        self.0.push(format!("enter {}", label(node)));
        VisitorOption::Continue
    }

    fn leave(&mut self, node: &Node, _: Option<&Node>, _: &mut TraverseState) -> VisitorOption {
        self.0.push(format!("leave {}", label(node)));
        VisitorOption::Continue
    }
}

#[test]
fn test_break_stops_all_further_callbacks() {
    let mut events = Vec::new();
    let mut visitor = Recorder(&mut events);
    let mut breaker = TraverseCallbacks::new().on_enter(|node, _, state| {
        if node.as_char() == Some('b') {
            state.break_traversal();
        }
        VisitorOption::Continue
    });

    let mut state = TraverseState::new();
    traverse_with_state(&fixture("abc"), &mut Both(&mut visitor, &mut breaker), &mut state);
    drop(breaker);

    assert!(state.did_call_break());
    assert_eq!(
        events,
        vec!["enter alternative", "enter value(a)", "leave value(a)", "enter value(b)"]
    );
}

#[test]
fn test_preset_break_stops_at_first_checkpoint() {
    let mut events = Vec::new();
    let mut state = TraverseState::new();
    state.break_traversal();

    traverse_with_state(&fixture("abc"), &mut Recorder(&mut events), &mut state);

    assert_eq!(events, vec!["enter alternative"]);
}

/// Runs two visitors side by side; the second one decides control.
struct Both<'a, A, B>(&'a mut A, &'a mut B);

impl<A: Visitor, B: Visitor> Visitor for Both<'_, A, B> {
    fn enter(
        &mut self,
        node: &Node,
        parent: Option<&Node>,
        state: &mut TraverseState,
    ) -> VisitorOption {
        self.0.enter(node, parent, state);
        self.1.enter(node, parent, state)
    }

    fn leave(
        &mut self,
        node: &Node,
        parent: Option<&Node>,
        state: &mut TraverseState,
    ) -> VisitorOption {
        self.0.leave(node, parent, state);
        self.1.leave(node, parent, state)
    }
}

#[test]
fn test_leave_only_callbacks() {
    let mut chars = Vec::new();
    let mut callbacks = TraverseCallbacks::new().on_leave(|node, _, _| {
        chars.extend(node.as_char());
        VisitorOption::Continue
    });
    traverse(&fixture("a_or_b_or_c"), &mut callbacks);
    drop(callbacks);

    assert_eq!(chars, vec!['a', 'b', 'c']);
}
