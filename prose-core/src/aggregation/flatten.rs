//! Lazy constituent flattening

use crate::element::{Category, DiscourseFunction, Element, PhraseCategory};

/// Component indexes leading from a tree root to one of its constituents
pub type ComponentPath = Vec<usize>;

/// Iterator over the constituents of a tree with verb phrases spliced in place
///
/// Yields each constituent together with its path from the root.
pub struct Flatten<'a> {
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    prefix: ComponentPath,
    components: &'a [Element],
    next: usize,
}

fn is_verb_phrase(element: &Element) -> bool {
    element.category() == Category::Phrase(PhraseCategory::VerbPhrase)
        || element.function() == Some(DiscourseFunction::VerbPhrase)
}

pub fn flatten(tree: &Element) -> Flatten<'_> {
    Flatten {
        stack: vec![Frame {
            prefix: Vec::new(),
            components: tree.components(),
            next: 0,
        }],
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = (ComponentPath, &'a Element);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let components = frame.components;
            if frame.next >= components.len() {
                self.stack.pop();
                continue;
            }

            let index = frame.next;
            frame.next += 1;
            let mut path = frame.prefix.clone();
            path.push(index);

            let element = &components[index];
            if is_verb_phrase(element) {
                self.stack.push(Frame {
                    prefix: path,
                    components: element.components(),
                    next: 0,
                });
                continue;
            }
            return Some((path, element));
        }
    }
}
