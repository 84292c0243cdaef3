//! Aggregation rules

use super::pairing::{pair_constituents, LemmaPolicy, Pairing, Periphery};
use crate::element::{Category, Element, PhraseCategory};

/// The conjunction joining aggregated clauses
pub const DEFAULT_CONJUNCTION: &str = "and";

/// A way of merging two sibling elements
///
/// `None` means the rule does not apply. Implementations must not alter their inputs.
pub trait AggregationRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, first: &Element, second: &Element) -> Option<Element>;
}

fn is_active_clause(element: &Element) -> bool {
    element.category() == Category::Phrase(PhraseCategory::Clause)
        && !element.features().is_passive()
}

/// Shared body of the conjunction reduction rules
///
/// Elides, on copies of the inputs, every lemma-identical pairing on `periphery` and wraps
/// the copies in a coordinated clause if anything was elided.
fn reduce(
    first: &Element,
    second: &Element,
    periphery: Periphery,
    policy: LemmaPolicy,
    elide: fn(&Pairing, &mut [Element]),
) -> Option<Element> {
    if !is_active_clause(first) || !is_active_clause(second) {
        return None;
    }

    let pairings = pair_constituents(first, second);
    let mut copies = [first.clone(), second.clone()];
    let mut elided = 0;
    for pairing in pairings.iter().filter(|p| p.periphery == periphery) {
        if pairing.lemma_identical(&[first, second], policy) {
            elide(pairing, &mut copies);
            elided += 1;
        }
    }

    if elided == 0 {
        return None;
    }
    let [a, b] = copies;
    Some(Element::coordinated(
        first.category(),
        vec![a, b],
        DEFAULT_CONJUNCTION,
    ))
}

/// Forward conjunction reduction
///
/// Shared material before the verb is kept in the first clause and elided from the second:
/// "John ate an apple" + "John drank water" → "John ate an apple and drank water".
#[derive(Debug, Clone, Default)]
pub struct ForwardConjunctionReduction {
    pub policy: LemmaPolicy,
}

impl ForwardConjunctionReduction {
    pub fn new(policy: LemmaPolicy) -> Self {
        Self { policy }
    }
}

impl AggregationRule for ForwardConjunctionReduction {
    fn name(&self) -> &'static str {
        "forward-conjunction-reduction"
    }

    fn apply(&self, first: &Element, second: &Element) -> Option<Element> {
        reduce(
            first,
            second,
            Periphery::Left,
            self.policy,
            Pairing::elide_rightmost,
        )
    }
}

/// Backward conjunction reduction
///
/// Shared material from the verb onwards is kept in the last clause and elided from the first:
/// "John bought the car" + "Mary sold the car" → "John bought and Mary sold the car".
#[derive(Debug, Clone, Default)]
pub struct BackwardConjunctionReduction {
    pub policy: LemmaPolicy,
}

impl BackwardConjunctionReduction {
    pub fn new(policy: LemmaPolicy) -> Self {
        Self { policy }
    }
}

impl AggregationRule for BackwardConjunctionReduction {
    fn name(&self) -> &'static str {
        "backward-conjunction-reduction"
    }

    fn apply(&self, first: &Element, second: &Element) -> Option<Element> {
        reduce(
            first,
            second,
            Periphery::Right,
            self.policy,
            Pairing::elide_leftmost,
        )
    }
}

/// Applies aggregation rules to sequences of sibling elements
#[derive(Default)]
pub struct Aggregator {
    rules: Vec<Box<dyn AggregationRule>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward then backward conjunction reduction
    pub fn standard(policy: LemmaPolicy) -> Self {
        Self::new()
            .with_rule(ForwardConjunctionReduction::new(policy))
            .with_rule(BackwardConjunctionReduction::new(policy))
    }

    pub fn with_rule(mut self, rule: impl AggregationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// The result of the first rule that applies to the pair, if any
    pub fn try_pair(&self, first: &Element, second: &Element) -> Option<Element> {
        self.rules.iter().find_map(|rule| {
            let merged = rule.apply(first, second);
            tracing::debug!(
                rule = rule.name(),
                applied = merged.is_some(),
                "aggregation rule"
            );
            merged
        })
    }

    /// Merges consecutive pairs wherever a rule applies, left to right
    ///
    /// A merged pair is not merged again with the element after it.
    pub fn aggregate(&self, elements: Vec<Element>) -> Vec<Element> {
        let mut result = Vec::with_capacity(elements.len());
        let mut pending = elements.into_iter().peekable();
        while let Some(current) = pending.next() {
            if let Some(next) = pending.peek() {
                if let Some(merged) = self.try_pair(&current, next) {
                    pending.next();
                    result.push(merged);
                    continue;
                }
            }
            result.push(current);
        }
        result
    }
}
