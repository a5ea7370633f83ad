use std::fmt;

use serde::{Deserialize, Serialize};

/// Attachment state of a widget: `Unattached -> Attached -> Detached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WidgetState {
    #[default]
    Unattached,
    Attached,
    Detached,
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unattached => "unattached",
            Self::Attached => "attached",
            Self::Detached => "detached",
        };
        f.write_str(label)
    }
}
