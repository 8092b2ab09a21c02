//! Tests for the generated WIC SDK navigation payload.

use navtree::{wic_sdk, LinkTarget, TreeNode};

// ============================================================================
// Test helpers (traversal is deliberately not crate API)
// ============================================================================

fn walk<'a>(node: &'a TreeNode, visit: &mut dyn FnMut(&'a TreeNode)) {
    visit(node);
    if let Some(children) = node.children.as_inline() {
        for child in children {
            walk(child, visit);
        }
    }
}

fn depth(node: &TreeNode) -> usize {
    match node.children.as_inline() {
        Some(children) => 1 + children.iter().map(depth).max().unwrap_or(0),
        None => 1,
    }
}

// ============================================================================
// Outline shape
// ============================================================================

#[test]
fn test_root_is_the_project() {
    let nav = wic_sdk();
    let root = nav.tree();
    assert_eq!(root.label, "WIC SDK");
    assert_eq!(root.link, LinkTarget::page("index.html"));
    assert_eq!(root.children.as_inline().map(<[_]>::len), Some(3));
}

#[test]
fn test_exactly_one_linux_documentation_child() {
    let nav = wic_sdk();
    let matching = nav
        .tree()
        .children
        .as_inline()
        .unwrap()
        .iter()
        .filter(|child| child.label == "WIC SDK Documentation - version for Linux")
        .count();
    assert_eq!(matching, 1);
}

#[test]
fn test_outline_depth_is_four() {
    let nav = wic_sdk();
    assert_eq!(depth(nav.tree()), 4);
}

#[test]
fn test_documentation_sections_in_document_order() {
    let nav = wic_sdk();
    let sections = &nav.tree().children.as_inline().unwrap()[0];
    let labels: Vec<&str> = sections
        .children
        .as_inline()
        .unwrap()
        .iter()
        .map(|child| child.label.as_str())
        .collect();
    assert_eq!(
        labels,
        [
            "Introduction",
            "Requirements",
            "Installation",
            "Libraries description",
            "About",
        ]
    );
}

#[test]
fn test_section_anchors_point_into_the_main_page() {
    let nav = wic_sdk();
    let sections = &nav.tree().children.as_inline().unwrap()[0];
    for section in sections.children.as_inline().unwrap() {
        assert_eq!(section.link.page_url(), Some("index.html"), "{}", section.label);
        assert!(section.link.fragment().is_some(), "{}", section.label);
    }
}

#[test]
fn test_files_is_a_grouping_header() {
    let nav = wic_sdk();
    let files = &nav.tree().children.as_inline().unwrap()[2];
    assert_eq!(files.label, "Files");
    assert!(files.link.is_none());
    assert!(!files.link.is_clickable());
}

#[test]
fn test_external_subtrees() {
    let nav = wic_sdk();
    let top = nav.tree().children.as_inline().unwrap();

    let class_list = &top[1].children.as_inline().unwrap()[0];
    assert_eq!(class_list.label, "Class List");
    assert_eq!(class_list.children.as_external(), Some("annotated_dup"));

    let file_list = &top[2].children.as_inline().unwrap()[0];
    assert_eq!(file_list.label, "File List");
    assert_eq!(file_list.children.as_external(), Some("files"));
}

#[test]
fn test_every_link_is_well_formed() {
    let nav = wic_sdk();
    walk(nav.tree(), &mut |node| {
        if let Some(href) = node.link.href() {
            assert!(!href.is_empty(), "{}", node.label);
            assert!(
                !href.chars().any(char::is_whitespace),
                "{}: {href}",
                node.label
            );
            // Raw strings re-parse to the same target.
            assert_eq!(LinkTarget::parse(&href).as_ref(), Ok(&node.link));
        }
    });
}

#[test]
fn test_every_label_is_nonempty() {
    let nav = wic_sdk();
    walk(nav.tree(), &mut |node| {
        assert!(!node.label.is_empty());
    });
}

// ============================================================================
// Index and sync messages
// ============================================================================

#[test]
fn test_index_entries() {
    let nav = wic_sdk();
    let index = nav.index();
    assert_eq!(index.len(), 2);
    assert_eq!(index.get(0), Some("_authentificator_8h_source.html"));
    assert_eq!(
        index.get(1),
        Some("class_camera_serial_settings.html#aa6674a097c384cd86f7be62f434fd451")
    );
}

#[test]
fn test_index_iteration_matches_slice() {
    let nav = wic_sdk();
    let index = nav.index();
    let collected: Vec<&str> = index.iter().collect();
    let sliced: Vec<&str> = index.as_slice().iter().map(String::as_str).collect();
    assert_eq!(collected, sliced);
}

#[test]
fn test_sync_tooltips() {
    let nav = wic_sdk();
    assert_eq!(
        nav.sync_messages().enable,
        "click to enable panel synchronisation"
    );
    assert_eq!(
        nav.sync_messages().disable,
        "click to disable panel synchronisation"
    );
}

// ============================================================================
// Immutability / determinism
// ============================================================================

#[test]
fn test_repeated_reads_are_identical() {
    let first = wic_sdk();
    let second = wic_sdk();
    assert_eq!(first, second);
    assert_eq!(first.tree(), second.tree());
    assert_eq!(first.index(), second.index());
    assert_eq!(first.sync_messages(), second.sync_messages());
}

#[cfg(feature = "std")]
#[test]
fn test_static_accessor_returns_one_allocation() {
    use navtree::wic_sdk_static;

    assert!(std::ptr::eq(wic_sdk_static(), wic_sdk_static()));
    assert_eq!(wic_sdk_static(), &wic_sdk());
}
