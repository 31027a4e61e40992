//! Two-way conversion between a textual optimization filter expression
//! and per-option enabled states over the fixed catalog.
//!
//! Grammar: comma-separated terms, each a catalog path, a path with `*`
//! wildcard segments (one segment matching one or more components), or
//! either prefixed with `!` to disable the matched subset. Terms apply
//! left to right; later terms override earlier ones. Parsing is
//! permissive by contract: malformed terms are ignored, never an error.

use crate::FilterOption;

/// Codec over one immutable catalog slice. Construct once next to the
/// catalog and reuse; the codec holds no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct FilterCodec<'a> {
    options: &'a [FilterOption],
}

impl<'a> FilterCodec<'a> {
    #[must_use]
    pub fn new(options: &'a [FilterOption]) -> Self {
        Self { options }
    }

    /// The per-option enabled states used when no filter is given.
    #[must_use]
    pub fn defaults(&self) -> Vec<bool> {
        self.options.iter().map(|o| o.default_enabled).collect()
    }

    /// Parse a filter expression into one boolean per catalog entry, in
    /// catalog order.
    ///
    /// An empty or blank expression yields the catalog defaults. A
    /// non-empty expression starts from all-disabled and applies each
    /// term in turn, so entries no term touches stay disabled.
    #[must_use]
    pub fn parse(&self, expr: &str) -> Vec<bool> {
        if expr.trim().is_empty() {
            return self.defaults();
        }

        let mut states = vec![false; self.options.len()];
        for raw_term in expr.split(',') {
            let term = raw_term.trim();
            let (enable, pattern) = match term.strip_prefix('!') {
                Some(rest) => (false, rest.trim()),
                None => (true, term),
            };
            // Dotted separators are accepted and normalized.
            let pattern = pattern.replace('.', "/");
            let Some(segments) = split_pattern(&pattern) else {
                continue;
            };
            for (i, option) in self.options.iter().enumerate() {
                let path: Vec<&str> = option.path.split('/').collect();
                if segments_match(&segments, &path) {
                    states[i] = enable;
                }
            }
        }
        states
    }

    /// Serialize enabled states back to a filter expression.
    ///
    /// Deterministic minimal-term strategy, documented rather than
    /// mandated: the empty string when `states` equals the defaults, a
    /// bare `*` when everything is enabled, and otherwise per top-level
    /// group either the enabled leaf paths, or `group/*` plus `!leaf`
    /// negations when most of the group is enabled. The binding contract
    /// is the boolean round trip `parse(format(v)) == v`, not string
    /// stability.
    ///
    /// `states` shorter than the catalog is read as false-padded; extra
    /// entries are ignored.
    #[must_use]
    pub fn format(&self, states: &[bool]) -> String {
        let state = |i: usize| states.get(i).copied().unwrap_or(false);

        let matches_defaults = self
            .options
            .iter()
            .enumerate()
            .all(|(i, o)| state(i) == o.default_enabled);
        if matches_defaults {
            return String::new();
        }
        if (0..self.options.len()).all(|i| state(i)) {
            return "*".to_owned();
        }

        let mut terms: Vec<String> = Vec::new();
        for group in self.groups() {
            let enabled: Vec<usize> = group.iter().copied().filter(|&i| state(i)).collect();
            let disabled: Vec<usize> = group.iter().copied().filter(|&i| !state(i)).collect();
            // `g/*` cannot reach a single-segment leaf, so wildcard
            // emission is only safe when every leaf has a subpath.
            let wildcard_safe = group.len() > 1
                && group.iter().all(|&i| self.options[i].path.contains('/'));

            if disabled.is_empty() && wildcard_safe {
                terms.push(format!("{}/*", self.options[group[0]].group()));
            } else if wildcard_safe && !enabled.is_empty() && disabled.len() < enabled.len() {
                terms.push(format!("{}/*", self.options[group[0]].group()));
                for i in disabled {
                    terms.push(format!("!{}", self.options[i].path));
                }
            } else {
                for i in enabled {
                    terms.push(self.options[i].path.clone());
                }
            }
        }
        if terms.is_empty() {
            // Nothing enabled, yet not the default state: the empty
            // string would read back as the defaults, so disable
            // explicitly.
            return "!*".to_owned();
        }
        terms.join(",")
    }

    /// Catalog indices grouped by top-level path component, in catalog
    /// first-appearance order.
    fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();
        for (i, option) in self.options.iter().enumerate() {
            let key = option.group();
            match groups.iter_mut().find(|(g, _)| *g == key) {
                Some((_, indices)) => indices.push(i),
                None => groups.push((key, vec![i])),
            }
        }
        groups.into_iter().map(|(_, indices)| indices).collect()
    }
}

/// Split a pattern into segments, rejecting malformed terms: empty
/// patterns, empty segments, and segments mixing `*` with other text.
fn split_pattern(pattern: &str) -> Option<Vec<&str>> {
    if pattern.is_empty() {
        return None;
    }
    let segments: Vec<&str> = pattern.split('/').collect();
    for segment in &segments {
        if segment.is_empty() {
            return None;
        }
        if segment.contains('*') && *segment != "*" {
            return None;
        }
    }
    Some(segments)
}

/// Glob-style segment match: a `*` segment consumes one or more path
/// components, a literal segment consumes exactly itself.
fn segments_match(pattern: &[&str], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((&"*", rest)) => (1..=path.len()).any(|taken| segments_match(rest, &path[taken..])),
        Some((literal, rest)) => match path.split_first() {
            Some((component, path_rest)) => component == literal && segments_match(rest, path_rest),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<FilterOption> {
        vec![
            FilterOption::new("class/marking/final", true),
            FilterOption::new("class/merging/vertical", true),
            FilterOption::new("class/merging/horizontal", false),
            FilterOption::new("code/simplification/arithmetic", true),
            FilterOption::new("code/simplification/cast", true),
            FilterOption::new("code/removal/advanced", true),
        ]
    }

    fn codec_parse(expr: &str) -> Vec<bool> {
        let options = catalog();
        FilterCodec::new(&options).parse(expr)
    }

    #[test]
    fn empty_expression_uses_defaults() {
        assert_eq!(codec_parse(""), vec![true, true, false, true, true, true]);
        assert_eq!(codec_parse("   "), vec![true, true, false, true, true, true]);
    }

    #[test]
    fn bare_star_enables_everything() {
        assert_eq!(codec_parse("*"), vec![true; 6]);
    }

    #[test]
    fn literal_term_enables_one_leaf() {
        assert_eq!(
            codec_parse("code/removal/advanced"),
            vec![false, false, false, false, false, true]
        );
    }

    #[test]
    fn wildcard_matches_one_or_more_components() {
        // `class/*` spans both the marking and merging subtrees.
        assert_eq!(
            codec_parse("class/*"),
            vec![true, true, true, false, false, false]
        );
        // A trailing wildcard after two literal components.
        assert_eq!(
            codec_parse("code/simplification/*"),
            vec![false, false, false, true, true, false]
        );
    }

    #[test]
    fn later_terms_override_earlier_ones() {
        assert_eq!(
            codec_parse("class/*,!class/merging/*"),
            vec![true, false, false, false, false, false]
        );
        // Re-enable after a negation.
        assert_eq!(
            codec_parse("!class/*,class/marking/final"),
            vec![true, false, false, false, false, false]
        );
    }

    #[test]
    fn untouched_entries_stay_disabled() {
        let states = codec_parse("class/marking/final");
        assert_eq!(states, vec![true, false, false, false, false, false]);
    }

    #[test]
    fn dotted_separators_are_normalized() {
        assert_eq!(
            codec_parse("code.simplification.cast"),
            vec![false, false, false, false, true, false]
        );
    }

    #[test]
    fn malformed_terms_are_ignored() {
        // Empty term, empty segment, glob mixed into a segment.
        assert_eq!(codec_parse(",,"), vec![false; 6]);
        assert_eq!(codec_parse("class//final"), vec![false; 6]);
        assert_eq!(codec_parse("class/mark*"), vec![false; 6]);
        // A malformed term does not poison the rest of the expression.
        assert_eq!(
            codec_parse("bogus//,code/removal/advanced"),
            vec![false, false, false, false, false, true]
        );
    }

    #[test]
    fn unknown_paths_match_nothing() {
        assert_eq!(codec_parse("field/propagation/value"), vec![false; 6]);
    }

    #[test]
    fn format_defaults_is_empty() {
        let options = catalog();
        let codec = FilterCodec::new(&options);
        assert_eq!(codec.format(&codec.defaults()), "");
    }

    #[test]
    fn format_all_enabled_is_star() {
        let options = catalog();
        let codec = FilterCodec::new(&options);
        assert_eq!(codec.format(&[true; 6]), "*");
    }

    #[test]
    fn format_whole_group_uses_wildcard() {
        let options = catalog();
        let codec = FilterCodec::new(&options);
        let states = [true, true, true, false, false, false];
        assert_eq!(codec.format(&states), "class/*");
    }

    #[test]
    fn format_all_disabled_is_negated_star() {
        let options = catalog();
        let codec = FilterCodec::new(&options);
        assert_eq!(codec.format(&[false; 6]), "!*");
        assert_eq!(codec.parse("!*"), vec![false; 6]);
    }

    #[test]
    fn format_mostly_enabled_group_uses_negation() {
        let options = catalog();
        let codec = FilterCodec::new(&options);
        let states = [true, false, true, true, true, true];
        let expr = codec.format(&states);
        assert_eq!(codec.parse(&expr), states);
        assert!(expr.contains('!'), "expected a negated leaf in {expr:?}");
    }

    #[test]
    fn format_sparse_group_lists_leaves() {
        let options = catalog();
        let codec = FilterCodec::new(&options);
        let states = [false, false, false, true, false, false];
        assert_eq!(codec.format(&states), "code/simplification/arithmetic");
    }

    #[test]
    fn format_short_states_read_as_false() {
        let options = catalog();
        let codec = FilterCodec::new(&options);
        let expr = codec.format(&[true]);
        assert_eq!(codec.parse(&expr), vec![true, false, false, false, false, false]);
    }

    #[test]
    fn round_trip_exhaustive_small_catalog() {
        let options = vec![
            FilterOption::new("a/x", true),
            FilterOption::new("a/y", false),
            FilterOption::new("b/z", true),
        ];
        let codec = FilterCodec::new(&options);
        for bits in 0_u8..8 {
            let states: Vec<bool> = (0..3).map(|i| bits & (1 << i) != 0).collect();
            let expr = codec.format(&states);
            assert_eq!(codec.parse(&expr), states, "failed for {expr:?}");
        }
    }

    #[test]
    fn wildcard_precedence_reference_case() {
        let options = vec![
            FilterOption::new("a/x", true),
            FilterOption::new("a/y", true),
            FilterOption::new("b/z", true),
        ];
        let codec = FilterCodec::new(&options);
        assert_eq!(codec.parse("a/*,!a/y"), vec![true, false, false]);
    }

    #[test]
    fn single_segment_leaf_round_trips() {
        let options = vec![
            FilterOption::new("inline", true),
            FilterOption::new("code/merging", true),
        ];
        let codec = FilterCodec::new(&options);
        let states = [true, false];
        let expr = codec.format(&states);
        assert_eq!(codec.parse(&expr), states);
    }
}
