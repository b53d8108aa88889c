//! Shared TUI components

pub mod create_form;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod issue_card;
pub mod issue_detail;
pub mod sign_in;
pub mod toast;

pub use create_form::{CreateFormModal, CreateFormModalProps};
pub use empty_state::{
    EmptyState, EmptyStateKind, EmptyStateProps, LoadingSkeleton, column_empty_text,
};
pub use footer::{
    Footer, FooterProps, Shortcut, board_shortcuts, create_shortcuts, detail_shortcuts,
    drag_shortcuts, sign_in_shortcuts,
};
pub use header::{Header, HeaderProps, SyncBadge, SyncBadgeProps};
pub use issue_card::{IssueCard, IssueCardProps};
pub use issue_detail::{IssueDetailPanel, IssueDetailPanelProps};
pub use sign_in::{SignIn, SignInProps};
pub use toast::{Toast, ToastLevel, ToastNotification, ToastNotificationProps};
