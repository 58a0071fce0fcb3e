//! Scripted in-memory drop trees for unit tests.

use std::collections::VecDeque;

use async_trait::async_trait;

use filedrop_core::error::AppError;
use filedrop_core::result::AppResult;
use filedrop_core::traits::{DirectoryEntry, DirectoryReader, DroppedEntry, FileEntry};
use filedrop_core::types::FileHandle;

/// Blueprint of a dropped entry.
#[derive(Debug, Clone)]
pub enum Node {
    File {
        name: String,
        size: usize,
        fail: bool,
    },
    Dir {
        name: String,
        children: Vec<Node>,
        page: usize,
        fail: bool,
    },
}

pub fn file(name: &str, size: usize) -> Node {
    Node::File {
        name: name.to_string(),
        size,
        fail: false,
    }
}

pub fn failing_file(name: &str) -> Node {
    Node::File {
        name: name.to_string(),
        size: 0,
        fail: true,
    }
}

pub fn dir(name: &str, children: Vec<Node>, page: usize) -> Node {
    Node::Dir {
        name: name.to_string(),
        children,
        page,
        fail: false,
    }
}

pub fn failing_dir(name: &str) -> Node {
    Node::Dir {
        name: name.to_string(),
        children: Vec::new(),
        page: 100,
        fail: true,
    }
}

impl From<Node> for DroppedEntry {
    fn from(node: Node) -> Self {
        match node {
            Node::File { name, size, fail } => {
                DroppedEntry::File(Box::new(MemFile { name, size, fail }))
            }
            Node::Dir {
                name,
                children,
                page,
                fail,
            } => DroppedEntry::Directory(Box::new(MemDir {
                name,
                children,
                page,
                fail,
            })),
        }
    }
}

#[derive(Debug)]
struct MemFile {
    name: String,
    size: usize,
    fail: bool,
}

#[async_trait]
impl FileEntry for MemFile {
    fn name(&self) -> &str {
        &self.name
    }

    async fn file(&self) -> AppResult<FileHandle> {
        if self.fail {
            return Err(AppError::ingestion_read(format!("{} vanished", self.name)));
        }
        Ok(FileHandle::in_memory(self.name.clone(), vec![0u8; self.size]))
    }
}

#[derive(Debug)]
struct MemDir {
    name: String,
    children: Vec<Node>,
    page: usize,
    fail: bool,
}

impl DirectoryEntry for MemDir {
    fn name(&self) -> &str {
        &self.name
    }

    fn reader(&self) -> Box<dyn DirectoryReader> {
        Box::new(MemReader {
            remaining: self.children.iter().cloned().collect(),
            page: self.page.max(1),
            fail: self.fail,
        })
    }
}

#[derive(Debug)]
struct MemReader {
    remaining: VecDeque<Node>,
    page: usize,
    fail: bool,
}

#[async_trait]
impl DirectoryReader for MemReader {
    async fn read_entries(&mut self) -> AppResult<Vec<DroppedEntry>> {
        if self.fail {
            return Err(AppError::ingestion_read("permission revoked"));
        }
        let n = self.page.min(self.remaining.len());
        Ok(self.remaining.drain(..n).map(DroppedEntry::from).collect())
    }
}
