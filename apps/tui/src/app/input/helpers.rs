use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use lightsched_tui::cascade::DropdownOption;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Indices of the selectable options matching `query`, kept in option order.
pub fn filter_indices(options: &[DropdownOption], query: &str) -> Vec<usize> {
    let matcher = SkimMatcherV2::default().ignore_case();
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| !option.disabled)
        .filter(|(_, option)| matcher.fuzzy_match(&option.label, query).is_some())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(label: &str, disabled: bool) -> DropdownOption {
        DropdownOption {
            value: label.to_string(),
            label: label.to_string(),
            disabled,
        }
    }

    #[test]
    fn wrapping_stays_in_bounds() {
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_increment(0, 0), 0);
        assert_eq!(wrap_decrement(0, 0), 0);
    }

    #[test]
    fn filtering_skips_the_prompt_and_keeps_order() {
        let options = vec![
            option("Choose Province", true),
            option("Western Cape", false),
            option("Gauteng", false),
            option("Eastern Cape", false),
        ];

        assert_eq!(filter_indices(&options, "cape"), vec![1, 3]);
        assert_eq!(filter_indices(&options, "wc"), vec![1]);
        assert!(filter_indices(&options, "zz").is_empty());
    }
}
