//! The generated navigation payload for the WIC SDK Linux documentation.
//!
//! This module plays the role of the generator's output: a fixed, fully
//! materialized payload. Everything in it is data; building the tree is the
//! only "computation", and it always produces the same value.

#[cfg(not(test))]
use alloc::string::ToString;
#[cfg(not(test))]
use alloc::vec;

use crate::index::NavIndex;
use crate::payload::NavTreeData;
use crate::sync::SyncMessages;
use crate::tree::TreeNode;

/// Build the WIC SDK navigation payload.
///
/// Pure: every call returns an identical value.
pub fn wic_sdk() -> NavTreeData {
    NavTreeData::new(outline(), index(), SyncMessages::default())
}

/// The WIC SDK navigation payload as a process-wide immutable constant.
///
/// Built on first access, shared thereafter; every call returns the same
/// allocation.
#[cfg(feature = "std")]
pub fn wic_sdk_static() -> &'static NavTreeData {
    use std::sync::OnceLock;

    static DATA: OnceLock<NavTreeData> = OnceLock::new();
    DATA.get_or_init(wic_sdk)
}

fn outline() -> TreeNode {
    TreeNode::page("WIC SDK", "index.html").with_children(vec![
        TreeNode::page("WIC SDK Documentation - version for Linux", "index.html").with_children(
            vec![
                TreeNode::anchor("Introduction", "index.html", "intro_sec"),
                TreeNode::anchor("Requirements", "index.html", "intro_req"),
                TreeNode::anchor("Installation", "index.html", "instal_sec"),
                TreeNode::anchor("Libraries description", "index.html", "lib_sec").with_children(
                    vec![
                        TreeNode::anchor("Compilation", "index.html", "comp_sec"),
                        TreeNode::anchor("Running the applications", "index.html", "desc_sec"),
                        TreeNode::anchor(
                            "Temperature calculations and radiometry information",
                            "index.html",
                            "radiometry",
                        ),
                    ],
                ),
                TreeNode::anchor("About", "index.html", "about_sec"),
            ],
        ),
        TreeNode::page("Classes", "annotated.html").with_children(vec![
            TreeNode::page("Class List", "annotated.html").with_external_children("annotated_dup"),
            TreeNode::page("Class Index", "classes.html"),
            TreeNode::page("Class Members", "functions.html").with_children(vec![
                TreeNode::page("All", "functions.html"),
                TreeNode::page("Functions", "functions_func.html"),
                TreeNode::page("Enumerations", "functions_enum.html"),
            ]),
        ]),
        TreeNode::group("Files").with_children(vec![
            TreeNode::page("File List", "files.html").with_external_children("files")
        ]),
    ])
}

fn index() -> NavIndex {
    NavIndex::from_entries(vec![
        "_authentificator_8h_source.html".to_string(),
        "class_camera_serial_settings.html#aa6674a097c384cd86f7be62f434fd451".to_string(),
    ])
}
