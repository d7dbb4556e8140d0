//! Initial workspace shown when a session starts.

use super::file_tree::{FileTree, FileTreeError, Node, ROOT_ID};

pub fn seed_snapshot() -> Node {
    Node::folder(
        ROOT_ID,
        ROOT_ID,
        vec![
            Node::folder(
                "src",
                "src",
                vec![
                    Node::file("src/index.js", "index.js"),
                    Node::file("src/styles.css", "styles.css"),
                ],
            ),
            Node::folder(
                "public",
                "public",
                vec![
                    Node::file("public/index.html", "index.html"),
                    Node::file("public/favicon.ico", "favicon.ico"),
                ],
            ),
            Node::file("package.json", "package.json"),
            Node::file("README.md", "README.md"),
        ],
    )
}

pub fn try_seed_tree() -> Result<FileTree, FileTreeError> {
    FileTree::from_snapshot(&seed_snapshot())
}

pub fn seed_tree() -> FileTree {
    match try_seed_tree() {
        Ok(tree) => tree,
        Err(err) => unreachable!("seed tree is well formed: {err}"),
    }
}
