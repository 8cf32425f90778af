//! Walk invariants checked over generated trees.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;
use regwalk_ast::{AnchorKind, GroupBehavior, Node, NodeType};
use regwalk_traverse::{TraverseCallbacks, VisitorOption, traverse};

fn value() -> impl Strategy<Value = Node> {
    prop::char::range('a', 'z').prop_map(Node::value)
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        4 => value(),
        1 => Just(Node::dot()),
        1 => Just(Node::class_escape("d")),
        1 => Just(Node::anchor(AnchorKind::Start)),
        1 => (1u32..10).prop_map(Node::reference),
    ]
}

fn class_item() -> impl Strategy<Value = Node> {
    prop_oneof![
        value(),
        (value(), value()).prop_map(|(min, max)| Node::class_range(min, max)),
    ]
}

fn tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Node::alternative),
            prop::collection::vec(inner.clone(), 1..4).prop_map(Node::disjunction),
            (prop::collection::vec(class_item(), 0..4), any::<bool>())
                .prop_map(|(body, negative)| Node::character_class(body, negative)),
            inner
                .clone()
                .prop_map(|term| Node::group(GroupBehavior::Normal, vec![term])),
            (0u32..3, any::<bool>(), inner)
                .prop_map(|(min, greedy, term)| Node::quantifier(min, None, greedy, term)),
        ]
    })
}

/// Nodes in pre-order, each with the size of its subtree.
fn preorder<'a>(node: &'a Node, out: &mut Vec<(&'a Node, usize)>) -> usize {
    let at = out.len();
    out.push((node, 0));
    let mut size = 1;
    for child in node.children().iter() {
        size += preorder(child, out);
    }
    out[at].1 = size;
    size
}

fn nodes(ast: &Node) -> Vec<(&Node, usize)> {
    let mut out = Vec::new();
    preorder(ast, &mut out);
    out
}

fn sorted_types(types: &[NodeType]) -> Vec<&'static str> {
    let mut names: Vec<_> = types.iter().map(NodeType::as_str).collect();
    names.sort_unstable();
    names
}

proptest! {
    #[test]
    fn test_every_node_is_entered_and_left_once(ast in tree()) {
        let mut entered = Vec::new();
        let mut left = Vec::new();
        let mut callbacks = TraverseCallbacks::new()
            .on_enter(|node, _, _| {
                entered.push(node as *const Node);
                VisitorOption::Continue
            })
            .on_leave(|node, _, _| {
                left.push(node.node_type);
                VisitorOption::Continue
            });
        let state = traverse(&ast, &mut callbacks);
        drop(callbacks);

        let expected = nodes(&ast);
        let unique: HashSet<_> = entered.iter().copied().collect();
        prop_assert!(!state.did_call_break());
        prop_assert_eq!(unique.len(), entered.len());
        prop_assert_eq!(entered.len(), expected.len());

        let expected_types: Vec<_> = expected.iter().map(|(node, _)| node.node_type).collect();
        prop_assert_eq!(sorted_types(&left), sorted_types(&expected_types));
    }

    #[test]
    fn test_skip_on_enter_hides_exactly_the_descendants(ast in tree(), pick in any::<Index>()) {
        let expected = nodes(&ast);
        let target = pick.index(expected.len());
        let (target_node, subtree) = expected[target];

        let mut entered = Vec::new();
        let mut left = Vec::new();
        let mut callbacks = TraverseCallbacks::new()
            .on_enter(|node, _, state| {
                entered.push(node as *const Node);
                if std::ptr::eq(node, target_node) {
                    state.skip();
                }
                VisitorOption::Continue
            })
            .on_leave(|node, _, _| {
                left.push(node as *const Node);
                VisitorOption::Continue
            });
        traverse(&ast, &mut callbacks);
        drop(callbacks);

        let hidden = target + 1..target + subtree;
        let visible: Vec<_> = expected
            .iter()
            .enumerate()
            .filter(|(i, _)| !hidden.contains(i))
            .map(|(_, (node, _))| *node as *const Node)
            .collect();
        prop_assert_eq!(&entered, &visible);
        prop_assert!(left.contains(&(target_node as *const Node)));
        prop_assert_eq!(left.len(), entered.len());
    }

    #[test]
    fn test_break_on_enter_stops_every_later_callback(ast in tree(), pick in any::<Index>()) {
        let expected = nodes(&ast);
        let target = pick.index(expected.len());
        let target_node = expected[target].0;

        let events = std::cell::RefCell::new(Vec::new());
        let mut callbacks = TraverseCallbacks::new()
            .on_enter(|node, _, state| {
                events.borrow_mut().push(("enter", node as *const Node));
                if std::ptr::eq(node, target_node) {
                    state.break_traversal();
                }
                VisitorOption::Continue
            })
            .on_leave(|node, _, _| {
                events.borrow_mut().push(("leave", node as *const Node));
                VisitorOption::Continue
            });
        let state = traverse(&ast, &mut callbacks);
        drop(callbacks);
        let events = events.into_inner();

        prop_assert!(state.did_call_break());
        prop_assert_eq!(events.last(), Some(&("enter", target_node as *const Node)));
        let enters = events.iter().filter(|(kind, _)| *kind == "enter").count();
        prop_assert_eq!(enters, target + 1);
    }

    #[test]
    fn test_skip_and_break_are_independent(
        ast in tree(),
        skip_at in any::<Index>(),
        break_at in any::<Index>(),
    ) {
        let expected = nodes(&ast);
        let skip_at = skip_at.index(expected.len());
        let break_at = break_at.index(expected.len());
        let (skip_node, skipped) = expected[skip_at];
        let break_node = expected[break_at].0;

        let mut break_seen = false;
        let mut callbacks = TraverseCallbacks::new().on_enter(|node, _, state| {
            if std::ptr::eq(node, skip_node) {
                state.skip();
            }
            if std::ptr::eq(node, break_node) {
                break_seen = true;
                state.break_traversal();
            }
            VisitorOption::Continue
        });
        let state = traverse(&ast, &mut callbacks);
        drop(callbacks);

        // Skip only hides the break when the break node sits below the skipped one.
        let hidden = skip_at < break_at && break_at < skip_at + skipped;
        prop_assert_eq!(break_seen, !hidden);
        prop_assert_eq!(state.did_call_break(), break_seen);
    }
}
