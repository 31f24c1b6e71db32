//! Character listing helpers: free-text search, tag filter, and tag discovery.
//!
//! These run over characters that are already loaded, so a search box can
//! re-filter on every keystroke without another round trip. The API applies
//! the same functions when `?search=` or `?tag=` is supplied.

use std::collections::BTreeSet;

/// The searchable fields of a character.
#[derive(Debug, Clone, Copy)]
pub struct Facets<'a> {
    pub name: &'a str,
    pub race: Option<&'a str>,
    pub occupation: Option<&'a str>,
    pub personality_traits: &'a [String],
}

/// Anything that can expose [`Facets`] can be searched and filtered.
pub trait Searchable {
    fn facets(&self) -> Facets<'_>;
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn opt_contains_ci(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| contains_ci(h, needle_lower))
}

/// Case-insensitive substring match over name, race and occupation.
///
/// An empty term matches every character.
pub fn matches_search<T: Searchable + ?Sized>(character: &T, term: &str) -> bool {
    let needle = term.to_lowercase();
    let f = character.facets();
    contains_ci(f.name, &needle)
        || opt_contains_ci(f.race, &needle)
        || opt_contains_ci(f.occupation, &needle)
}

/// Case-insensitive substring match over personality traits, race and
/// occupation.
///
/// An empty tag matches every character.
pub fn matches_tag<T: Searchable + ?Sized>(character: &T, tag: &str) -> bool {
    if tag.is_empty() {
        return true;
    }
    let needle = tag.to_lowercase();
    let f = character.facets();
    f.personality_traits
        .iter()
        .any(|trait_| contains_ci(trait_, &needle))
        || opt_contains_ci(f.race, &needle)
        || opt_contains_ci(f.occupation, &needle)
}

/// Keep the characters matching both the search term and the tag.
pub fn filter_characters<T: Searchable>(characters: Vec<T>, search: &str, tag: &str) -> Vec<T> {
    characters
        .into_iter()
        .filter(|c| matches_search(c, search) && matches_tag(c, tag))
        .collect()
}

/// Sorted, de-duplicated union of every race, occupation and personality
/// trait across `characters`. This is the option list of the tag filter.
pub fn collect_tags<'a, T, I>(characters: I) -> Vec<String>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut tags = BTreeSet::new();
    for character in characters {
        let f = character.facets();
        if let Some(race) = f.race.filter(|r| !r.is_empty()) {
            tags.insert(race.to_string());
        }
        if let Some(occupation) = f.occupation.filter(|o| !o.is_empty()) {
            tags.insert(occupation.to_string());
        }
        tags.extend(f.personality_traits.iter().cloned());
    }
    tags.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: &'static str,
        race: Option<&'static str>,
        occupation: Option<&'static str>,
        traits: Vec<String>,
    }

    impl Searchable for Sample {
        fn facets(&self) -> Facets<'_> {
            Facets {
                name: self.name,
                race: self.race,
                occupation: self.occupation,
                personality_traits: &self.traits,
            }
        }
    }

    fn sample(
        name: &'static str,
        race: Option<&'static str>,
        occupation: Option<&'static str>,
        traits: &[&str],
    ) -> Sample {
        Sample {
            name,
            race,
            occupation,
            traits: traits.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn roster() -> Vec<Sample> {
        vec![
            sample("Aragorn", Some("Human"), Some("Ranger"), &["Brave", "Loyal"]),
            sample("Legolas", Some("Elf"), Some("Archer"), &["Graceful"]),
            sample("Gimli", Some("Dwarf"), None, &["Stubborn", "Loyal"]),
            sample("Tom", None, None, &[]),
        ]
    }

    #[test]
    fn empty_search_matches_everything() {
        assert_eq!(filter_characters(roster(), "", "").len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_over_name_race_occupation() {
        let names = |v: Vec<Sample>| v.into_iter().map(|s| s.name).collect::<Vec<_>>();
        assert_eq!(names(filter_characters(roster(), "ARAG", "")), vec!["Aragorn"]);
        assert_eq!(names(filter_characters(roster(), "elf", "")), vec!["Legolas"]);
        assert_eq!(names(filter_characters(roster(), "arch", "")), vec!["Legolas"]);
    }

    #[test]
    fn search_ignores_personality_traits() {
        assert!(filter_characters(roster(), "stubborn", "").is_empty());
    }

    #[test]
    fn tag_filter_matches_traits_race_and_occupation() {
        let loyal = filter_characters(roster(), "", "loyal");
        assert_eq!(loyal.len(), 2);
        let dwarves = filter_characters(roster(), "", "Dwarf");
        assert_eq!(dwarves.len(), 1);
        let rangers = filter_characters(roster(), "", "ranger");
        assert_eq!(rangers[0].name, "Aragorn");
    }

    #[test]
    fn search_and_tag_combine() {
        let hits = filter_characters(roster(), "gim", "loyal");
        assert_eq!(hits.len(), 1);
        assert!(filter_characters(roster(), "leg", "loyal").is_empty());
    }

    #[test]
    fn tags_are_sorted_and_unique() {
        let characters = roster();
        let tags = collect_tags(&characters);
        assert_eq!(
            tags,
            vec![
                "Archer", "Brave", "Dwarf", "Elf", "Graceful", "Human", "Loyal", "Ranger",
                "Stubborn",
            ]
        );
    }
}
