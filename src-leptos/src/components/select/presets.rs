//! Campaign-flavored presets over [`Select`]: fixed option lists for
//! character class, race, alignment, creature size and creature type.

use leptos::prelude::*;

use super::options::{SelectOption, SelectValue, SelectionChange};
use super::Select;

pub fn class_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("barbarian", "Barbarian"),
        SelectOption::new("bard", "Bard"),
        SelectOption::new("cleric", "Cleric"),
        SelectOption::new("druid", "Druid"),
        SelectOption::new("fighter", "Fighter"),
        SelectOption::new("monk", "Monk"),
        SelectOption::new("paladin", "Paladin"),
        SelectOption::new("ranger", "Ranger"),
        SelectOption::new("rogue", "Rogue"),
        SelectOption::new("sorcerer", "Sorcerer"),
        SelectOption::new("warlock", "Warlock"),
        SelectOption::new("wizard", "Wizard"),
    ]
}

pub fn race_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("human", "Human").in_group("Common"),
        SelectOption::new("elf", "Elf").in_group("Common"),
        SelectOption::new("dwarf", "Dwarf").in_group("Common"),
        SelectOption::new("halfling", "Halfling").in_group("Common"),
        SelectOption::new("dragonborn", "Dragonborn").in_group("Exotic"),
        SelectOption::new("gnome", "Gnome").in_group("Exotic"),
        SelectOption::new("half-elf", "Half-Elf").in_group("Exotic"),
        SelectOption::new("half-orc", "Half-Orc").in_group("Exotic"),
        SelectOption::new("tiefling", "Tiefling").in_group("Exotic"),
    ]
}

pub fn alignment_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("lg", "Lawful Good").with_description("The Crusader"),
        SelectOption::new("ng", "Neutral Good").with_description("The Benefactor"),
        SelectOption::new("cg", "Chaotic Good").with_description("The Rebel"),
        SelectOption::new("ln", "Lawful Neutral").with_description("The Judge"),
        SelectOption::new("n", "True Neutral").with_description("The Undecided"),
        SelectOption::new("cn", "Chaotic Neutral").with_description("The Free Spirit"),
        SelectOption::new("le", "Lawful Evil").with_description("The Dominator"),
        SelectOption::new("ne", "Neutral Evil").with_description("The Malefactor"),
        SelectOption::new("ce", "Chaotic Evil").with_description("The Destroyer"),
    ]
}

pub fn size_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("tiny", "Tiny"),
        SelectOption::new("small", "Small"),
        SelectOption::new("medium", "Medium"),
        SelectOption::new("large", "Large"),
        SelectOption::new("huge", "Huge"),
        SelectOption::new("gargantuan", "Gargantuan"),
    ]
}

pub fn creature_type_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("aberration", "Aberration"),
        SelectOption::new("beast", "Beast"),
        SelectOption::new("celestial", "Celestial"),
        SelectOption::new("construct", "Construct"),
        SelectOption::new("dragon", "Dragon"),
        SelectOption::new("elemental", "Elemental"),
        SelectOption::new("fey", "Fey"),
        SelectOption::new("fiend", "Fiend"),
        SelectOption::new("giant", "Giant"),
        SelectOption::new("humanoid", "Humanoid"),
        SelectOption::new("monstrosity", "Monstrosity"),
        SelectOption::new("ooze", "Ooze"),
        SelectOption::new("plant", "Plant"),
        SelectOption::new("undead", "Undead"),
    ]
}

#[component]
pub fn ClassSelect(
    #[prop(optional, into)] value: MaybeProp<Vec<SelectValue>>,
    #[prop(optional)] on_change: Option<Callback<SelectionChange>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_text: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] searchable: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <Select
            options=class_options()
            value=value
            on_change=on_change
            label=label
            placeholder=placeholder.unwrap_or_else(|| "Select class".to_string())
            helper_text=helper_text
            error_text=error_text
            multiple=multiple
            searchable=searchable
            clearable=clearable
            required=required
            disabled=disabled
        />
    }
}

#[component]
pub fn RaceSelect(
    #[prop(optional, into)] value: MaybeProp<Vec<SelectValue>>,
    #[prop(optional)] on_change: Option<Callback<SelectionChange>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_text: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] searchable: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <Select
            options=race_options()
            value=value
            on_change=on_change
            label=label
            placeholder=placeholder.unwrap_or_else(|| "Select race".to_string())
            helper_text=helper_text
            error_text=error_text
            multiple=multiple
            searchable=searchable
            clearable=clearable
            required=required
            disabled=disabled
        />
    }
}

#[component]
pub fn AlignmentSelect(
    #[prop(optional, into)] value: MaybeProp<Vec<SelectValue>>,
    #[prop(optional)] on_change: Option<Callback<SelectionChange>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_text: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] searchable: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <Select
            options=alignment_options()
            value=value
            on_change=on_change
            label=label
            placeholder=placeholder.unwrap_or_else(|| "Select alignment".to_string())
            helper_text=helper_text
            error_text=error_text
            multiple=multiple
            searchable=searchable
            clearable=clearable
            required=required
            disabled=disabled
        />
    }
}

#[component]
pub fn SizeSelect(
    #[prop(optional, into)] value: MaybeProp<Vec<SelectValue>>,
    #[prop(optional)] on_change: Option<Callback<SelectionChange>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_text: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] searchable: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <Select
            options=size_options()
            value=value
            on_change=on_change
            label=label
            placeholder=placeholder.unwrap_or_else(|| "Select size".to_string())
            helper_text=helper_text
            error_text=error_text
            multiple=multiple
            searchable=searchable
            clearable=clearable
            required=required
            disabled=disabled
        />
    }
}

#[component]
pub fn CreatureTypeSelect(
    #[prop(optional, into)] value: MaybeProp<Vec<SelectValue>>,
    #[prop(optional)] on_change: Option<Callback<SelectionChange>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error_text: Option<String>,
    #[prop(optional)] multiple: bool,
    #[prop(optional)] searchable: bool,
    #[prop(optional)] clearable: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <Select
            options=creature_type_options()
            value=value
            on_change=on_change
            label=label
            placeholder=placeholder.unwrap_or_else(|| "Select type".to_string())
            helper_text=helper_text
            error_text=error_text
            multiple=multiple
            searchable=searchable
            clearable=clearable
            required=required
            disabled=disabled
        />
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::options::group_options;
    use super::*;
    use std::collections::HashSet;

    fn values(options: &[SelectOption]) -> HashSet<String> {
        options.iter().map(|o| o.value.to_string()).collect()
    }

    #[test]
    fn test_preset_lists_have_unique_values() {
        for list in [
            class_options(),
            race_options(),
            alignment_options(),
            size_options(),
            creature_type_options(),
        ] {
            assert_eq!(values(&list).len(), list.len());
        }
    }

    #[test]
    fn test_class_list_is_flat() {
        let classes = class_options();
        assert_eq!(classes.len(), 12);
        assert!(classes.iter().all(|o| o.group.is_none()));
    }

    #[test]
    fn test_races_are_grouped_common_then_exotic() {
        let grouped = group_options(&race_options());
        assert!(grouped.ungrouped.is_empty());
        let names: Vec<_> = grouped.groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Common", "Exotic"]);
        assert_eq!(grouped.groups[0].1.len(), 4);
        assert_eq!(grouped.groups[1].1.len(), 5);
    }

    #[test]
    fn test_alignments_carry_epithets() {
        let alignments = alignment_options();
        assert_eq!(alignments.len(), 9);
        assert!(alignments.iter().all(|o| o.description.is_some()));
        let neutral = alignments.iter().find(|o| o.value == SelectValue::from("n")).unwrap();
        assert_eq!(neutral.description.as_deref(), Some("The Undecided"));
    }

    #[test]
    fn test_creature_taxonomy_sizes() {
        assert_eq!(size_options().len(), 6);
        assert_eq!(creature_type_options().len(), 14);
    }
}
