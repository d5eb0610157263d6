use ratatui::style::Color;
use term_panes::drivers::{ButtonState, InputSnapshot, MouseButton};
use term_panes::{DynamicPaneConfig, PaneTree, Point};

fn frame(tree: &mut PaneTree, pointer: (i32, i32), left: bool) {
    let buttons = if left {
        ButtonState::only(MouseButton::Left)
    } else {
        ButtonState::NONE
    };
    let input = InputSnapshot::new(pointer.into(), buttons, true);
    tree.route_pointer(&input);
    tree.update(&input);
}

#[test]
fn drag_offsets_position_by_cumulative_pointer_delta() {
    let mut tree = PaneTree::master((80, 24), Color::Black).unwrap();
    let root = tree.root();
    let pane = tree
        .add_dynamic(root, DynamicPaneConfig::new((20, 8), 2).at((10, 4)))
        .unwrap();
    let start = tree.position(pane.pane);

    // Grab the ribbon off-center to show the grab point does not matter.
    let mut pointer = (27, 5);
    frame(&mut tree, pointer, false);
    frame(&mut tree, pointer, true);
    let deltas = [(1, 0), (3, 2), (-2, 1), (0, 0), (5, -1)];
    let mut total = Point::ORIGIN;
    for (dx, dy) in deltas {
        pointer = (pointer.0 + dx, pointer.1 + dy);
        total += Point::new(dx, dy);
        frame(&mut tree, pointer, true);
        assert_eq!(tree.position(pane.pane), start + total);
    }
    frame(&mut tree, pointer, false);

    assert!(!tree.is_dragging(pane.pane));
    assert_eq!(tree.position(pane.pane), start + total);
    assert_eq!(tree.position(pane.pane), Point::new(17, 6));
}

#[test]
fn drop_outside_parent_snaps_center_to_parent_center() {
    let mut tree = PaneTree::master((80, 24), Color::Black).unwrap();
    let root = tree.root();
    let pane = tree
        .add_dynamic(root, DynamicPaneConfig::new((20, 8), 1).at((10, 4)))
        .unwrap();

    frame(&mut tree, (11, 4), false);
    frame(&mut tree, (11, 4), true);
    frame(&mut tree, (-30, 2), true);
    assert_eq!(tree.position(pane.pane), Point::new(-31, 2));
    frame(&mut tree, (-30, 2), false);

    assert_eq!(
        tree.rect(pane.pane).center(),
        tree.local_rect(root).center()
    );
    assert_eq!(tree.position(pane.pane), Point::new(30, 8));
}

#[test]
fn drop_with_center_inside_parent_keeps_position() {
    let mut tree = PaneTree::master((80, 24), Color::Black).unwrap();
    let root = tree.root();
    let pane = tree
        .add_dynamic(root, DynamicPaneConfig::new((20, 8), 1).at((10, 4)))
        .unwrap();

    // Half the pane hangs off the right edge but its center stays inside.
    frame(&mut tree, (11, 4), false);
    frame(&mut tree, (11, 4), true);
    frame(&mut tree, (70, 4), true);
    frame(&mut tree, (70, 4), false);
    assert_eq!(tree.position(pane.pane), Point::new(69, 4));
}

#[test]
fn pressing_ribbon_promotes_pane_to_front() {
    let mut tree = PaneTree::master((80, 24), Color::Black).unwrap();
    let root = tree.root();
    let back = tree
        .add_dynamic(root, DynamicPaneConfig::new((20, 8), 1).at((0, 0)))
        .unwrap();
    let front = tree
        .add_dynamic(root, DynamicPaneConfig::new((20, 8), 1).at((10, 4)))
        .unwrap();
    assert_eq!(tree.children(root), &[back.pane, front.pane]);

    frame(&mut tree, (2, 0), false);
    frame(&mut tree, (2, 0), true);
    frame(&mut tree, (2, 0), false);
    assert_eq!(tree.children(root), &[front.pane, back.pane]);

    // The raised pane now wins the overlap on the next frame.
    frame(&mut tree, (12, 5), false);
    assert!(tree.is_hovered(back.content));
    assert!(!tree.is_hovered(front.ribbon));
    assert!(!tree.is_hovered(front.content));
}

#[test]
fn occluded_ribbon_cannot_be_grabbed() {
    let mut tree = PaneTree::master((80, 24), Color::Black).unwrap();
    let root = tree.root();
    let back = tree
        .add_dynamic(root, DynamicPaneConfig::new((20, 8), 1).at((10, 4)))
        .unwrap();
    let front = tree
        .add_dynamic(root, DynamicPaneConfig::new((20, 8), 1).at((5, 2)))
        .unwrap();

    // (12, 4) is on back's ribbon but under front's content.
    frame(&mut tree, (12, 4), false);
    frame(&mut tree, (12, 4), true);
    assert!(!tree.is_dragging(back.pane));
    assert!(!tree.is_dragging(front.pane));
    assert_eq!(tree.children(root), &[back.pane, front.pane]);
}
