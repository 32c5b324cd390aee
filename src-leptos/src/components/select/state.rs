//! Interaction state machine for the Select control.
//!
//! The machine owns open/closed state, the search term and the keyboard
//! focus index. It never touches the DOM or consumer callbacks directly:
//! every mutation returns the list of [`SelectCommand`]s the view layer has
//! to execute, which keeps the whole interaction logic testable as plain
//! code.

use super::options::{filter_options, SelectOption, SelectValue, SelectionChange};

/// Side effects requested by the state machine, executed by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectCommand {
    /// Dropdown transitioned to open, notify the consumer
    DropdownOpened,
    /// Dropdown transitioned to closed, notify the consumer
    DropdownClosed,
    /// Move keyboard focus back to the trigger element
    FocusTrigger,
    /// Move keyboard focus into the search input once the panel is mounted
    FocusSearch,
    /// Search term changed, notify the consumer with the raw term
    SearchChanged(String),
    /// Selection changed, notify the consumer with the resolved payload
    SelectionChanged,
}

/// Why the dropdown is being closed. Escape additionally returns keyboard
/// focus to the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    TriggerToggle,
    Escape,
    SelectionCommit,
    OutsideClick,
}

/// State machine backing one Select instance.
///
/// `focused` always refers to an index into the filtered option list, or
/// `None` when nothing is focused; it is re-clamped whenever the filter or
/// the option list changes.
#[derive(Debug, Clone)]
pub struct SelectModel {
    options: Vec<SelectOption>,
    selected: Vec<SelectValue>,
    multiple: bool,
    searchable: bool,
    disabled: bool,
    loading: bool,
    is_open: bool,
    search_term: String,
    focused: Option<usize>,
}

/// What the trigger should display for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    /// Nothing selected, show the placeholder
    Placeholder,
    /// Exactly one selection, show its label
    Label(String),
    /// Two or more selections in multi mode, show a count summary
    Count(usize),
}

impl SelectModel {
    pub fn new(options: Vec<SelectOption>, multiple: bool, searchable: bool) -> Self {
        Self {
            options,
            selected: Vec::new(),
            multiple,
            searchable,
            disabled: false,
            loading: false,
            is_open: false,
            search_term: String::new(),
            focused: None,
        }
    }

    pub fn with_selected(mut self, values: Vec<SelectValue>) -> Self {
        self.selected = self.coerce_selection(values);
        self
    }

    // ----- queries -----

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn selected_values(&self) -> &[SelectValue] {
        &self.selected
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn is_selected(&self, value: &SelectValue) -> bool {
        self.selected.contains(value)
    }

    /// Options passing the current search filter, in list order.
    pub fn filtered(&self) -> Vec<SelectOption> {
        if self.searchable {
            filter_options(&self.options, &self.search_term)
        } else {
            self.options.clone()
        }
    }

    /// Resolved payload for a change notification. Options are resolved
    /// against the full list, so with duplicate values the first match wins.
    pub fn selection_change(&self) -> SelectionChange {
        let options = self
            .options
            .iter()
            .filter(|o| self.selected.contains(&o.value))
            .cloned()
            .collect();
        SelectionChange { values: self.selected.clone(), options }
    }

    /// What the trigger should render, per the display contract.
    pub fn display_value(&self) -> DisplayValue {
        match self.selected.len() {
            0 => DisplayValue::Placeholder,
            1 => DisplayValue::Label(self.label_for(&self.selected[0])),
            n if self.multiple => DisplayValue::Count(n),
            // Single mode never holds more than one value, but a caller can
            // force it through an external value; show the first.
            _ => DisplayValue::Label(self.label_for(&self.selected[0])),
        }
    }

    fn label_for(&self, value: &SelectValue) -> String {
        self.options
            .iter()
            .find(|o| &o.value == value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| value.to_string())
    }

    // ----- external synchronization -----

    pub fn sync_flags(&mut self, disabled: bool, loading: bool) {
        self.disabled = disabled;
        self.loading = loading;
    }

    /// Replace the option list, re-clamping keyboard focus against the new
    /// filtered list.
    pub fn sync_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.clamp_focus();
    }

    /// Mirror an externally controlled value.
    pub fn sync_value(&mut self, values: Vec<SelectValue>) {
        self.selected = self.coerce_selection(values);
    }

    fn coerce_selection(&self, values: Vec<SelectValue>) -> Vec<SelectValue> {
        if self.multiple {
            values
        } else {
            values.into_iter().take(1).collect()
        }
    }

    fn clamp_focus(&mut self) {
        let len = self.filtered().len();
        self.focused = match self.focused {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    // ----- transitions -----

    /// Trigger click, or Enter/Space/ArrowDown while closed. Inert while
    /// disabled or loading.
    pub fn toggle_dropdown(&mut self) -> Vec<SelectCommand> {
        if self.disabled || self.loading {
            return Vec::new();
        }
        if self.is_open {
            self.close_dropdown(CloseReason::TriggerToggle)
        } else {
            self.open_dropdown()
        }
    }

    fn open_dropdown(&mut self) -> Vec<SelectCommand> {
        self.is_open = true;
        self.focused = if self.filtered().is_empty() { None } else { Some(0) };

        let mut commands = vec![SelectCommand::DropdownOpened];
        if self.searchable {
            commands.push(SelectCommand::FocusSearch);
        }
        commands
    }

    /// Close from any path. Always resets the search term and the focus
    /// index so the next open starts fresh.
    pub fn close_dropdown(&mut self, reason: CloseReason) -> Vec<SelectCommand> {
        if !self.is_open {
            return Vec::new();
        }
        self.is_open = false;
        self.search_term.clear();
        self.focused = None;

        let mut commands = vec![SelectCommand::DropdownClosed];
        if reason == CloseReason::Escape {
            commands.push(SelectCommand::FocusTrigger);
        }
        commands
    }

    /// Select the option at a filtered-list index (mouse click on a row).
    /// Disabled options and out-of-range indexes are no-ops.
    pub fn select_at(&mut self, index: usize) -> Vec<SelectCommand> {
        let filtered = self.filtered();
        let Some(option) = filtered.get(index) else {
            return Vec::new();
        };
        if option.disabled {
            return Vec::new();
        }

        let value = option.value.clone();
        let mut commands = Vec::new();

        if self.multiple {
            if self.selected.contains(&value) {
                self.selected.retain(|v| v != &value);
            } else {
                self.selected.push(value);
            }
        } else {
            // Re-selecting the current value still emits and still closes.
            self.selected = vec![value];
            commands.extend(self.close_dropdown(CloseReason::SelectionCommit));
        }

        commands.push(SelectCommand::SelectionChanged);
        commands
    }

    /// Select the keyboard-focused option (Enter/Space while open).
    pub fn select_focused(&mut self) -> Vec<SelectCommand> {
        match self.focused {
            Some(index) => self.select_at(index),
            None => Vec::new(),
        }
    }

    /// Empty the selection without touching open/closed state.
    pub fn clear_selection(&mut self) -> Vec<SelectCommand> {
        self.selected.clear();
        vec![SelectCommand::SelectionChanged]
    }

    /// Search box edit: refilter, reset focus to the first match and notify
    /// the consumer with the raw term.
    pub fn set_search(&mut self, term: String) -> Vec<SelectCommand> {
        self.search_term = term.clone();
        self.focused = if self.filtered().is_empty() { None } else { Some(0) };
        vec![SelectCommand::SearchChanged(term)]
    }

    /// Keyboard input from the trigger or the search box. Returns whether
    /// the key was consumed (the view layer calls prevent_default) and the
    /// commands to execute.
    pub fn handle_key(&mut self, key: &str) -> (bool, Vec<SelectCommand>) {
        match key {
            "Enter" | " " => {
                let commands = if self.is_open {
                    self.select_focused()
                } else {
                    self.toggle_dropdown()
                };
                (true, commands)
            }
            "Escape" => {
                if self.is_open {
                    (true, self.close_dropdown(CloseReason::Escape))
                } else {
                    (false, Vec::new())
                }
            }
            "ArrowDown" => {
                let commands = if self.is_open {
                    self.step_focus(1)
                } else {
                    self.toggle_dropdown()
                };
                (true, commands)
            }
            "ArrowUp" => {
                let commands = if self.is_open { self.step_focus(-1) } else { Vec::new() };
                (true, commands)
            }
            "Home" => {
                if self.is_open {
                    (true, self.jump_focus(0))
                } else {
                    (false, Vec::new())
                }
            }
            "End" => {
                if self.is_open {
                    let last = self.filtered().len().saturating_sub(1);
                    (true, self.jump_focus(last))
                } else {
                    (false, Vec::new())
                }
            }
            _ => (false, Vec::new()),
        }
    }

    fn step_focus(&mut self, delta: i32) -> Vec<SelectCommand> {
        let len = self.filtered().len();
        if len == 0 {
            self.focused = None;
            return Vec::new();
        }
        let last = len - 1;
        let next = match (self.focused, delta) {
            (Some(i), d) if d > 0 => (i + 1).min(last),
            (Some(i), _) => i.saturating_sub(1),
            // No focus yet: either direction lands on the first option
            (None, _) => 0,
        };
        self.focused = Some(next);
        Vec::new()
    }

    fn jump_focus(&mut self, index: usize) -> Vec<SelectCommand> {
        let len = self.filtered().len();
        if len == 0 {
            self.focused = None;
            return Vec::new();
        }
        self.focused = Some(index.min(len - 1));
        Vec::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::components::select::options::SelectOption;

    fn languages() -> Vec<SelectOption> {
        vec![
            SelectOption::new(1, "Common"),
            SelectOption::new(2, "Elvish"),
            SelectOption::new(3, "Dwarvish"),
        ]
    }

    fn open_model(options: Vec<SelectOption>, multiple: bool, searchable: bool) -> SelectModel {
        let mut model = SelectModel::new(options, multiple, searchable);
        model.toggle_dropdown();
        model
    }

    #[test]
    fn test_open_sets_focus_to_first() {
        let mut model = SelectModel::new(languages(), false, false);
        assert!(!model.is_open());
        assert_eq!(model.focused_index(), None);

        let commands = model.toggle_dropdown();

        assert!(model.is_open());
        assert_eq!(model.focused_index(), Some(0));
        assert_eq!(commands, vec![SelectCommand::DropdownOpened]);
    }

    #[test]
    fn test_open_searchable_requests_search_focus() {
        let mut model = SelectModel::new(languages(), false, true);
        let commands = model.toggle_dropdown();
        assert_eq!(
            commands,
            vec![SelectCommand::DropdownOpened, SelectCommand::FocusSearch]
        );
    }

    #[test]
    fn test_open_with_empty_options_has_no_focus() {
        let mut model = SelectModel::new(vec![], false, false);
        model.toggle_dropdown();
        assert!(model.is_open());
        assert_eq!(model.focused_index(), None);
    }

    #[test]
    fn test_toggle_closed_resets_search_and_focus() {
        let mut model = open_model(languages(), false, true);
        model.set_search("elv".to_string());
        assert_eq!(model.search_term(), "elv");

        let commands = model.toggle_dropdown();

        assert!(!model.is_open());
        assert_eq!(model.search_term(), "");
        assert_eq!(model.focused_index(), None);
        assert_eq!(commands, vec![SelectCommand::DropdownClosed]);
    }

    #[test]
    fn test_disabled_and_loading_are_inert() {
        let mut model = SelectModel::new(languages(), false, false);
        model.sync_flags(true, false);
        assert!(model.toggle_dropdown().is_empty());
        assert!(!model.is_open());

        model.sync_flags(false, true);
        assert!(model.toggle_dropdown().is_empty());
        assert!(!model.is_open());

        model.sync_flags(false, false);
        model.toggle_dropdown();
        assert!(model.is_open());
    }

    // Scenario: type "elv" into a searchable select, the filtered list
    // narrows and focus snaps back to the first match.
    #[test]
    fn test_search_filters_and_resets_focus() {
        let mut model = open_model(
            vec![SelectOption::new(1, "Common"), SelectOption::new(2, "Elvish")],
            false,
            true,
        );
        model.handle_key("ArrowDown");
        assert_eq!(model.focused_index(), Some(1));

        let commands = model.set_search("elv".to_string());

        let filtered = model.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "Elvish");
        assert_eq!(model.focused_index(), Some(0));
        assert_eq!(commands, vec![SelectCommand::SearchChanged("elv".to_string())]);
    }

    #[test]
    fn test_search_with_no_matches_drops_focus() {
        let mut model = open_model(languages(), false, true);
        model.set_search("zzz".to_string());
        assert!(model.filtered().is_empty());
        assert_eq!(model.focused_index(), None);
    }

    // Single mode: selecting replaces the value, closes the dropdown and
    // reports the resolved option.
    #[test]
    fn test_single_select_commits_and_closes() {
        let mut model = open_model(languages(), false, false);

        let commands = model.select_at(1);

        assert_eq!(model.selected_values(), &[SelectValue::from(2)]);
        assert!(!model.is_open());
        assert_eq!(
            commands,
            vec![SelectCommand::DropdownClosed, SelectCommand::SelectionChanged]
        );

        let change = model.selection_change();
        assert_eq!(change.values, vec![SelectValue::from(2)]);
        assert_eq!(change.options.len(), 1);
        assert_eq!(change.options[0].label, "Elvish");
    }

    #[test]
    fn test_single_reselect_still_emits_and_closes() {
        let mut model = open_model(languages(), false, false);
        model.select_at(1);
        model.toggle_dropdown();

        let commands = model.select_at(1);

        assert_eq!(model.selected_values(), &[SelectValue::from(2)]);
        assert!(!model.is_open());
        assert!(commands.contains(&SelectCommand::SelectionChanged));
    }

    // Multi mode: toggling the same value twice restores the original set
    // and the dropdown stays open throughout.
    #[test]
    fn test_multi_toggle_is_idempotent_and_stays_open() {
        let mut model = open_model(languages(), true, false);

        let first = model.select_at(0);
        assert_eq!(model.selected_values(), &[SelectValue::from(1)]);
        assert!(model.is_open());
        assert_eq!(first, vec![SelectCommand::SelectionChanged]);

        let second = model.select_at(0);
        assert!(model.selected_values().is_empty());
        assert!(model.is_open());
        assert_eq!(second, vec![SelectCommand::SelectionChanged]);
    }

    #[test]
    fn test_multi_selection_changes_by_one_per_select() {
        let mut model = open_model(languages(), true, false);
        let mut previous = model.selected_values().len();
        for index in [0, 1, 2, 1, 0] {
            model.select_at(index);
            let current = model.selected_values().len();
            assert_eq!(previous.abs_diff(current), 1);
            previous = current;
        }
    }

    #[test]
    fn test_multi_change_payload_resolves_all_options() {
        let mut model = open_model(languages(), true, false);
        model.select_at(2);
        model.select_at(0);

        let change = model.selection_change();
        // Values keep insertion order, options resolve in list order
        assert_eq!(change.values, vec![SelectValue::from(3), SelectValue::from(1)]);
        let labels: Vec<&str> = change.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Common", "Dwarvish"]);
    }

    #[test]
    fn test_disabled_option_is_a_no_op() {
        let options = vec![
            SelectOption::new(1, "Common"),
            SelectOption::new(2, "Forbidden").disabled(true),
        ];
        let mut model = open_model(options, false, false);

        let commands = model.select_at(1);

        assert!(commands.is_empty());
        assert!(model.selected_values().is_empty());
        assert!(model.is_open());
        assert_eq!(model.focused_index(), Some(0));
    }

    #[test]
    fn test_select_out_of_range_is_a_no_op() {
        let mut model = open_model(languages(), false, false);
        assert!(model.select_at(99).is_empty());
        assert!(model.selected_values().is_empty());
        assert!(model.is_open());
    }

    // Clear empties the selection without touching open/closed state.
    #[test]
    fn test_clear_preserves_dropdown_state() {
        let mut model = open_model(languages(), true, false);
        model.select_at(0);
        model.select_at(1);
        assert_eq!(model.selected_values().len(), 2);

        let commands = model.clear_selection();

        assert!(model.selected_values().is_empty());
        assert!(model.is_open());
        assert_eq!(commands, vec![SelectCommand::SelectionChanged]);
        let change = model.selection_change();
        assert!(change.is_cleared());
        assert!(change.options.is_empty());

        model.toggle_dropdown();
        let commands = model.clear_selection();
        assert!(!model.is_open());
        assert_eq!(commands, vec![SelectCommand::SelectionChanged]);
    }

    #[test]
    fn test_escape_closes_and_refocuses_trigger() {
        let mut model = open_model(languages(), false, true);
        model.set_search("elv".to_string());

        let (consumed, commands) = model.handle_key("Escape");

        assert!(consumed);
        assert!(!model.is_open());
        assert_eq!(model.search_term(), "");
        assert_eq!(model.focused_index(), None);
        assert_eq!(
            commands,
            vec![SelectCommand::DropdownClosed, SelectCommand::FocusTrigger]
        );
    }

    #[test]
    fn test_escape_while_closed_is_not_consumed() {
        let mut model = SelectModel::new(languages(), false, false);
        let (consumed, commands) = model.handle_key("Escape");
        assert!(!consumed);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_arrow_down_opens_when_closed() {
        let mut model = SelectModel::new(languages(), false, false);
        let (consumed, commands) = model.handle_key("ArrowDown");
        assert!(consumed);
        assert!(model.is_open());
        assert_eq!(model.focused_index(), Some(0));
        assert_eq!(commands, vec![SelectCommand::DropdownOpened]);
    }

    #[test]
    fn test_arrow_navigation_clamps_at_bounds() {
        let mut model = open_model(languages(), false, false);

        model.handle_key("ArrowUp");
        assert_eq!(model.focused_index(), Some(0));

        for _ in 0..5 {
            model.handle_key("ArrowDown");
        }
        assert_eq!(model.focused_index(), Some(2));

        model.handle_key("Home");
        assert_eq!(model.focused_index(), Some(0));

        model.handle_key("End");
        assert_eq!(model.focused_index(), Some(2));
    }

    #[test]
    fn test_home_end_not_consumed_while_closed() {
        let mut model = SelectModel::new(languages(), false, false);
        assert_eq!(model.handle_key("Home"), (false, vec![]));
        assert_eq!(model.handle_key("End"), (false, vec![]));
        // ArrowUp is consumed even while closed but does nothing
        assert_eq!(model.handle_key("ArrowUp"), (true, vec![]));
        assert!(!model.is_open());
    }

    #[test]
    fn test_enter_opens_when_closed() {
        let mut model = SelectModel::new(languages(), false, false);
        let (consumed, commands) = model.handle_key("Enter");
        assert!(consumed);
        assert!(model.is_open());
        assert_eq!(commands, vec![SelectCommand::DropdownOpened]);
    }

    #[test]
    fn test_space_selects_focused_while_open() {
        let mut model = open_model(languages(), false, false);
        model.handle_key("ArrowDown");

        let (consumed, commands) = model.handle_key(" ");

        assert!(consumed);
        assert_eq!(model.selected_values(), &[SelectValue::from(2)]);
        assert!(commands.contains(&SelectCommand::SelectionChanged));
    }

    // Keys against an empty filtered list are consumed but change nothing.
    #[test]
    fn test_empty_list_keys_are_safe_no_ops() {
        let mut model = open_model(languages(), false, true);
        model.set_search("zzz".to_string());
        assert!(model.filtered().is_empty());

        let (consumed, commands) = model.handle_key("Enter");
        assert!(consumed);
        assert!(commands.is_empty());
        assert!(model.selected_values().is_empty());
        assert!(model.is_open());

        model.handle_key("ArrowDown");
        model.handle_key("ArrowUp");
        model.handle_key("End");
        assert_eq!(model.focused_index(), None);
    }

    #[test]
    fn test_unknown_keys_fall_through() {
        let mut model = open_model(languages(), false, false);
        assert_eq!(model.handle_key("Tab"), (false, vec![]));
        assert_eq!(model.handle_key("a"), (false, vec![]));
    }

    #[test]
    fn test_sync_options_clamps_focus() {
        let mut model = open_model(languages(), false, false);
        model.handle_key("End");
        assert_eq!(model.focused_index(), Some(2));

        model.sync_options(vec![SelectOption::new(1, "Common")]);
        assert_eq!(model.focused_index(), Some(0));

        model.sync_options(vec![]);
        assert_eq!(model.focused_index(), None);
    }

    #[test]
    fn test_sync_value_mirrors_external_state() {
        let mut model = SelectModel::new(languages(), true, false);
        model.sync_value(vec![SelectValue::from(1), SelectValue::from(3)]);
        assert_eq!(model.selected_values().len(), 2);

        // Single mode keeps at most one value
        let mut single = SelectModel::new(languages(), false, false);
        single.sync_value(vec![SelectValue::from(1), SelectValue::from(3)]);
        assert_eq!(single.selected_values(), &[SelectValue::from(1)]);
    }

    #[test]
    fn test_selecting_value_missing_from_options_displays_raw() {
        let mut model = SelectModel::new(languages(), false, false);
        model.sync_value(vec![SelectValue::from("ghost")]);
        assert_eq!(model.display_value(), DisplayValue::Label("ghost".to_string()));
        assert!(model.selection_change().options.is_empty());
    }

    #[test]
    fn test_display_value_contract() {
        let mut model = SelectModel::new(languages(), true, false);
        assert_eq!(model.display_value(), DisplayValue::Placeholder);

        model.sync_value(vec![SelectValue::from(2)]);
        assert_eq!(model.display_value(), DisplayValue::Label("Elvish".to_string()));

        model.sync_value(vec![SelectValue::from(1), SelectValue::from(2)]);
        assert_eq!(model.display_value(), DisplayValue::Count(2));
    }

    #[test]
    fn test_duplicate_values_toggle_removes_all_copies() {
        let options = vec![
            SelectOption::new("x", "First"),
            SelectOption::new("x", "Second"),
            SelectOption::new("y", "Other"),
        ];
        let mut model = open_model(options, true, false);

        model.select_at(0);
        assert_eq!(model.selected_values(), &[SelectValue::from("x")]);
        // First match wins when resolving the payload
        assert_eq!(model.selection_change().options[0].label, "First");

        model.select_at(1);
        assert!(model.selected_values().is_empty());
    }

    #[test]
    fn test_reopen_starts_fresh() {
        let mut model = open_model(languages(), false, true);
        model.set_search("elv".to_string());
        model.handle_key("Escape");

        model.toggle_dropdown();

        assert_eq!(model.search_term(), "");
        assert_eq!(model.focused_index(), Some(0));
        assert_eq!(model.filtered().len(), 3);
    }
}
