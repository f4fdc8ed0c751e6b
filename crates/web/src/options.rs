//! Option lists for the user and receiver selections.

use goofycoin_core::{NO_SELECTION, Selection, UserSummary};

/// Display text of the receiver list's "nothing chosen" option.
pub const RECEIVER_PLACEHOLDER: &str = "select receiver";

/// Options for the acting-user list, in listing order.
pub fn user_options(users: &[UserSummary]) -> Vec<Selection> {
    users.iter().map(UserSummary::to_selection).collect()
}

/// Options for the receiver list: the placeholder first, then every user.
pub fn receiver_options(users: &[UserSummary]) -> Vec<Selection> {
    std::iter::once(Selection::new(NO_SELECTION, RECEIVER_PLACEHOLDER))
        .chain(users.iter().map(UserSummary::to_selection))
        .collect()
}
