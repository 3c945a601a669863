use super::Layout;

/// One rung of the segmentation ladder.
///
/// Returns `None` when the reply does not have the shape this strategy
/// looks for; the segmenter then moves on to the next strategy.
pub trait SegmentStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Splits `reply` into one string per section of `layout`.
    fn segment(&self, layout: &Layout, reply: &str) -> Option<Vec<String>>;
}

/// Splits on the literal section markers, in order.
pub struct MarkerSplit;

impl SegmentStrategy for MarkerSplit {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn segment(&self, layout: &Layout, reply: &str) -> Option<Vec<String>> {
        let first = layout.sections.first()?;
        let (_, mut rest) = reply.split_once(first.marker)?;

        let mut sections = vec![String::new(); layout.sections.len()];
        let mut found = 1;
        let mut current = 0;

        for (idx, spec) in layout.sections.iter().enumerate().skip(1) {
            match rest.split_once(spec.marker) {
                Some((before, after)) => {
                    sections[current] = before.trim().to_string();
                    rest = after;
                    current = idx;
                    found += 1;
                }
                None => break,
            }
        }
        sections[current] = rest.trim().to_string();

        if found < layout.required_markers {
            return None;
        }

        Some(sections)
    }
}

/// Line scanner: keyword lines switch the active section and are dropped,
/// other non-empty lines are appended to the active section.
pub struct KeywordScan;

impl SegmentStrategy for KeywordScan {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn segment(&self, layout: &Layout, reply: &str) -> Option<Vec<String>> {
        let mut sections = vec![String::new(); layout.sections.len()];
        let mut active: Option<usize> = None;

        for line in reply.lines() {
            let lower = line.to_lowercase();

            let switch = layout.sections.iter().position(|spec| {
                spec.keywords
                    .iter()
                    .any(|group| group.iter().all(|kw| lower.contains(kw)))
            });

            if let Some(idx) = switch {
                active = Some(idx);
                continue;
            }

            if let Some(idx) = active {
                if !line.trim().is_empty() {
                    sections[idx].push_str(line);
                    sections[idx].push('\n');
                }
            }
        }

        Some(sections.into_iter().map(|s| s.trim().to_string()).collect())
    }
}

/// Last resort: assigns blank-line separated paragraphs by position, or puts
/// the whole reply into the layout's fallback section.
pub struct PositionalSplit;

impl SegmentStrategy for PositionalSplit {
    fn name(&self) -> &'static str {
        "positional"
    }

    fn segment(&self, layout: &Layout, reply: &str) -> Option<Vec<String>> {
        let count = layout.sections.len();
        let mut sections = vec![String::new(); count];

        let paragraphs = paragraphs(reply);
        if layout.positional && count > 0 && paragraphs.len() >= count {
            for (idx, paragraph) in paragraphs[..count - 1].iter().enumerate() {
                sections[idx] = paragraph.clone();
            }
            sections[count - 1] = paragraphs[count - 1..].join("\n\n");
        } else if let Some(slot) = sections.get_mut(layout.fallback_section) {
            *slot = reply.trim().to_string();
        }

        Some(sections)
    }
}

/// Groups consecutive non-blank lines into paragraphs.
fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs() {
        let text = "one\nline two\n\n\nthree\n   \nfour";
        assert_eq!(paragraphs(text), vec!["one\nline two", "three", "four"]);
    }

    #[test]
    fn test_paragraphs_empty() {
        assert!(paragraphs("\n\n  \n").is_empty());
    }
}
