//! TF-IDF keyword ranking and document similarity
//!
//! Raw term counts, smoothed idf `ln((1 + n) / (1 + df)) + 1`, and L2
//! normalized document vectors.

use std::collections::{BTreeMap, HashSet};

use super::tokenize::terms;

type TermVector = BTreeMap<String, f64>;

fn term_counts(text: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for term in terms(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// TF-IDF vectors for a small corpus, one per document
fn vectorize(documents: &[&str]) -> Vec<TermVector> {
    let counts: Vec<_> = documents.iter().map(|doc| term_counts(doc)).collect();
    let n = documents.len() as f64;

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &counts {
        for term in doc.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    counts
        .iter()
        .map(|doc| {
            let mut vector: TermVector = doc
                .iter()
                .map(|(term, &count)| {
                    let df = document_frequency[term.as_str()] as f64;
                    let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                    (term.clone(), count as f64 * idf)
                })
                .collect();

            let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                vector.values_mut().for_each(|w| *w /= norm);
            }
            vector
        })
        .collect()
}

/// Highest-weighted terms of a single document, ties broken alphabetically
pub fn top_keywords(text: &str, n: usize) -> Vec<String> {
    let Some(vector) = vectorize(&[text]).pop() else {
        return Vec::new();
    };

    let mut ranked: Vec<(String, f64)> = vector.into_iter().collect();
    // BTreeMap order is alphabetical and the sort is stable
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(n).map(|(term, _)| term).collect()
}

/// Cosine similarity of two texts' TF-IDF vectors; 0.0 when either has no terms
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let vectors = vectorize(&[a, b]);
    let (va, vb) = (&vectors[0], &vectors[1]);
    if va.is_empty() || vb.is_empty() {
        return 0.0;
    }
    va.iter()
        .filter_map(|(term, wa)| vb.get(term).map(|wb| wa * wb))
        .sum()
}

/// Share of `a`'s top 20 keywords that are also among `b`'s top 20
pub fn keyword_overlap(a: &str, b: &str) -> f64 {
    let ka: HashSet<String> = top_keywords(a, 20).into_iter().collect();
    let kb: HashSet<String> = top_keywords(b, 20).into_iter().collect();
    if ka.is_empty() || kb.is_empty() {
        return 0.0;
    }
    ka.intersection(&kb).count() as f64 / ka.len() as f64
}
