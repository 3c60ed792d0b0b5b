//! Config comparison endpoint (§6): a pure function over two YAML blobs, no
//! store access. Useful for an operator previewing a deployment diff before
//! submitting it.

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub from_yaml: String,
    pub to_yaml: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Added,
    Removed,
    Unchanged,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub lines: Vec<DiffLine>,
    pub added: usize,
    pub removed: usize,
    pub identical: bool,
}

pub async fn compare(Json(req): Json<CompareRequest>) -> Json<CompareResponse> {
    Json(diff_yaml(&req.from_yaml, &req.to_yaml))
}

/// Line-level LCS diff. Config YAML documents are short enough (tens to
/// low hundreds of lines) that the O(n*m) table is cheap.
fn diff_yaml(from: &str, to: &str) -> CompareResponse {
    let from_lines: Vec<&str> = from.lines().collect();
    let to_lines: Vec<&str> = to.lines().collect();

    let n = from_lines.len();
    let m = to_lines.len();
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if from_lines[i] == to_lines[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut lines = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if from_lines[i] == to_lines[j] {
            lines.push(DiffLine {
                kind: DiffKind::Unchanged,
                text: from_lines[i].to_string(),
            });
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            lines.push(DiffLine {
                kind: DiffKind::Removed,
                text: from_lines[i].to_string(),
            });
            i += 1;
        } else {
            lines.push(DiffLine {
                kind: DiffKind::Added,
                text: to_lines[j].to_string(),
            });
            j += 1;
        }
    }
    while i < n {
        lines.push(DiffLine {
            kind: DiffKind::Removed,
            text: from_lines[i].to_string(),
        });
        i += 1;
    }
    while j < m {
        lines.push(DiffLine {
            kind: DiffKind::Added,
            text: to_lines[j].to_string(),
        });
        j += 1;
    }

    let added = lines.iter().filter(|l| l.kind == DiffKind::Added).count();
    let removed = lines.iter().filter(|l| l.kind == DiffKind::Removed).count();
    CompareResponse {
        identical: added == 0 && removed == 0,
        added,
        removed,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_configs_produce_no_diff() {
        let result = diff_yaml("a: 1\nb: 2\n", "a: 1\nb: 2\n");
        assert!(result.identical);
        assert_eq!(result.added, 0);
        assert_eq!(result.removed, 0);
    }

    #[test]
    fn changed_line_is_a_removal_and_an_addition() {
        let result = diff_yaml("a: 1\nb: 2\n", "a: 1\nb: 3\n");
        assert_eq!(result.added, 1);
        assert_eq!(result.removed, 1);
        assert!(!result.identical);
    }
}
