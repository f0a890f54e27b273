//! Application state — single-owner, main-thread only.
//!
//! All UI state lives here: the active tab, the list view's cursor and
//! search text, and the modal dialog. Transitions are plain methods so
//! the input layer and the tests drive the same code.

use aidboard_core::{Dataset, PackageStats};

/// Which top-level view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    List,
    BulkSend,
    IndividualSend,
    Tracking,
    DistributionReports,
}

impl Tab {
    /// Resolve an externally supplied tab identifier. Unrecognized
    /// values fall back to the list view.
    pub fn from_slug(slug: &str) -> Tab {
        match slug {
            "packages-list" => Tab::List,
            "bulk-send" => Tab::BulkSend,
            "individual-send" => Tab::IndividualSend,
            "tracking" => Tab::Tracking,
            "distribution-reports" => Tab::DistributionReports,
            _ => Tab::List,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::List => 0,
            Tab::BulkSend => 1,
            Tab::IndividualSend => 2,
            Tab::Tracking => 3,
            Tab::DistributionReports => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Tab> {
        match i {
            0 => Some(Tab::List),
            1 => Some(Tab::BulkSend),
            2 => Some(Tab::IndividualSend),
            3 => Some(Tab::Tracking),
            4 => Some(Tab::DistributionReports),
            _ => None,
        }
    }

    /// Short label for the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::List => "قائمة الطرود",
            Tab::BulkSend => "الإرسال الجماعي",
            Tab::IndividualSend => "الإرسال الفردي",
            Tab::Tracking => "تتبع الإرسالات",
            Tab::DistributionReports => "تقارير التوزيع",
        }
    }

    /// View header title.
    pub fn title(self) -> &'static str {
        match self {
            Tab::List => "قوالب الطرود",
            Tab::BulkSend => "الإرسال الجماعي",
            Tab::IndividualSend => "الإرسال الفردي",
            Tab::Tracking => "تتبع الإرسالات",
            Tab::DistributionReports => "تقارير التوزيع",
        }
    }

    /// View header subtitle.
    pub fn subtitle(self) -> &'static str {
        match self {
            Tab::List => "إدارة جميع قوالب الطرود في النظام",
            Tab::BulkSend => "إرسال طرود متعددة لمجموعة من المستفيدين",
            Tab::IndividualSend => "إرسال طرد لمستفيد واحد",
            Tab::Tracking => "متابعة حالة الطرود والإرسالات",
            Tab::DistributionReports => "تقارير مفصلة عن عمليات التوزيع",
        }
    }

    /// Header action button copy, where the view has one. All of these
    /// are inert placeholders except the list view's add action.
    pub fn action(self) -> Option<&'static str> {
        match self {
            Tab::List => Some("إضافة قالب جديد"),
            Tab::BulkSend => Some("بدء الإرسال الجماعي"),
            Tab::IndividualSend => Some("إرسال طرد فردي"),
            Tab::Tracking => None,
            Tab::DistributionReports => Some("تصدير التقرير"),
        }
    }

    pub fn next(self) -> Tab {
        Tab::from_index((self.index() + 1) % 5).unwrap()
    }

    pub fn prev(self) -> Tab {
        Tab::from_index((self.index() + 4) % 5).unwrap()
    }
}

/// Modal dialog mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit,
    View,
}

impl ModalMode {
    pub fn title(self) -> &'static str {
        match self {
            ModalMode::Add => "إضافة طرد جديد",
            ModalMode::Edit => "تعديل الطرد",
            ModalMode::View => "عرض تفاصيل الطرد",
        }
    }

    /// Confirm button copy. View mode has no confirm button.
    pub fn confirm_label(self) -> Option<&'static str> {
        match self {
            ModalMode::Add => Some("إضافة الطرد"),
            ModalMode::Edit => Some("حفظ التغييرات"),
            ModalMode::View => None,
        }
    }
}

/// Modal dialog state. `target` indexes into the package table; add
/// mode never carries a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Closed,
    Open {
        mode: ModalMode,
        target: Option<usize>,
    },
}

impl Modal {
    pub fn is_open(self) -> bool {
        matches!(self, Modal::Open { .. })
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// List view state: cursor, scroll, and the search box.
///
/// The search text is captured but deliberately not wired to any table
/// filtering; the table always shows the full dataset.
#[derive(Debug, Default)]
pub struct ListViewState {
    pub cursor: usize,
    pub scroll_offset: usize,
    pub search_input: String,
    pub search_editing: bool,
}

impl ListViewState {
    /// Keep the cursor inside the visible window of `height` rows.
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }
}

/// Top-level application state.
pub struct AppState {
    pub dataset: Dataset,
    pub active_tab: Tab,
    pub list: ListViewState,
    pub modal: Modal,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(dataset: Dataset, initial_tab: Tab) -> Self {
        Self {
            dataset,
            active_tab: initial_tab,
            list: ListViewState::default(),
            modal: Modal::Closed,
            status_message: None,
            running: true,
        }
    }

    /// Stats for the list view's cards, recomputed from the dataset.
    pub fn stats(&self) -> PackageStats {
        PackageStats::compute(&self.dataset.packages)
    }

    /// Open the dialog in add mode. Clears any previously selected
    /// target.
    pub fn open_add(&mut self) {
        self.modal = Modal::Open {
            mode: ModalMode::Add,
            target: None,
        };
    }

    /// Open the dialog in edit mode for the package at `index`.
    pub fn open_edit(&mut self, index: usize) {
        self.modal = Modal::Open {
            mode: ModalMode::Edit,
            target: Some(index),
        };
    }

    /// Open the dialog in view mode for the package at `index`.
    pub fn open_view(&mut self, index: usize) {
        self.modal = Modal::Open {
            mode: ModalMode::View,
            target: Some(index),
        };
    }

    /// Close the dialog, whatever mode it was in.
    pub fn dismiss_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn app() -> AppState {
        AppState::new(Dataset::sample(), Tab::List)
    }

    #[test]
    fn slug_resolution_matches_documented_mapping() {
        assert_eq!(Tab::from_slug("packages-list"), Tab::List);
        assert_eq!(Tab::from_slug("bulk-send"), Tab::BulkSend);
        assert_eq!(Tab::from_slug("individual-send"), Tab::IndividualSend);
        assert_eq!(Tab::from_slug("tracking"), Tab::Tracking);
        assert_eq!(
            Tab::from_slug("distribution-reports"),
            Tab::DistributionReports
        );
    }

    #[test]
    fn unrecognized_slug_falls_back_to_list() {
        assert_eq!(Tab::from_slug(""), Tab::List);
        assert_eq!(Tab::from_slug("packages_list"), Tab::List);
        assert_eq!(Tab::from_slug("reports"), Tab::List);
    }

    proptest! {
        #[test]
        fn any_other_slug_resolves_to_list(slug in ".*") {
            let known = [
                "packages-list",
                "bulk-send",
                "individual-send",
                "tracking",
                "distribution-reports",
            ];
            if !known.contains(&slug.as_str()) {
                prop_assert_eq!(Tab::from_slug(&slug), Tab::List);
            }
        }
    }

    #[test]
    fn tab_cycle() {
        assert_eq!(Tab::List.next(), Tab::BulkSend);
        assert_eq!(Tab::DistributionReports.next(), Tab::List);
        assert_eq!(Tab::List.prev(), Tab::DistributionReports);
        assert_eq!(Tab::BulkSend.prev(), Tab::List);
    }

    #[test]
    fn tab_index_round_trip() {
        for i in 0..5 {
            let tab = Tab::from_index(i).unwrap();
            assert_eq!(tab.index(), i);
        }
        assert!(Tab::from_index(5).is_none());
    }

    #[test]
    fn add_mode_clears_target() {
        let mut app = app();
        app.open_edit(2);
        app.open_add();
        assert_eq!(
            app.modal,
            Modal::Open {
                mode: ModalMode::Add,
                target: None
            }
        );
    }

    #[test]
    fn edit_and_view_carry_the_selected_index() {
        let mut app = app();
        app.open_view(3);
        assert_eq!(
            app.modal,
            Modal::Open {
                mode: ModalMode::View,
                target: Some(3)
            }
        );
        app.open_edit(3);
        assert_eq!(
            app.modal,
            Modal::Open {
                mode: ModalMode::Edit,
                target: Some(3)
            }
        );
    }

    #[test]
    fn dismiss_closes_from_every_mode() {
        let mut app = app();
        app.open_add();
        app.dismiss_modal();
        assert_eq!(app.modal, Modal::Closed);
        app.open_edit(0);
        app.dismiss_modal();
        assert_eq!(app.modal, Modal::Closed);
        app.open_view(0);
        app.dismiss_modal();
        assert_eq!(app.modal, Modal::Closed);
    }

    #[test]
    fn confirm_button_suppressed_in_view_mode() {
        assert_eq!(ModalMode::Add.confirm_label(), Some("إضافة الطرد"));
        assert_eq!(ModalMode::Edit.confirm_label(), Some("حفظ التغييرات"));
        assert_eq!(ModalMode::View.confirm_label(), None);
    }

    #[test]
    fn modal_titles_per_mode() {
        assert_eq!(ModalMode::Add.title(), "إضافة طرد جديد");
        assert_eq!(ModalMode::Edit.title(), "تعديل الطرد");
        assert_eq!(ModalMode::View.title(), "عرض تفاصيل الطرد");
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut list = ListViewState::default();
        list.cursor = 9;
        list.ensure_visible(5);
        assert_eq!(list.scroll_offset, 5);
        list.cursor = 2;
        list.ensure_visible(5);
        assert_eq!(list.scroll_offset, 2);
    }
}
