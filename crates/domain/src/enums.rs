//! Wire enumerations carried on requests and responses
//!
//! Every enum keeps an `Other(String)` passthrough variant so that values
//! introduced by the platform after this client version still round-trip
//! through deserialization. `wire_value()` exposes the exact string sent over
//! the wire; for known variants it is total by construction.

use serde::{Deserialize, Serialize};

/// A value with an exact string representation on the wire.
pub trait WireValue {
    /// The string representation sent over the wire.
    fn wire_value(&self) -> &str;
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        #[allow(missing_docs)]
        pub enum $name {
            $($variant,)+
            /// Wire value not known to this client version
            Other(String),
        }

        impl WireValue for $name {
            fn wire_value(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.wire_value().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.wire_value())
            }
        }
    };
}

wire_enum! {
    /// Who may view a video, album or folder
    ViewPrivacy {
        Anybody => "anybody",
        Contacts => "contacts",
        Disable => "disable",
        Nobody => "nobody",
        Password => "password",
        Unlisted => "unlisted",
        Users => "users",
    }
}

wire_enum! {
    /// Where a video may be embedded
    EmbedPrivacy {
        Public => "public",
        Private => "private",
        Whitelist => "whitelist",
    }
}

wire_enum! {
    /// Who may comment on a video
    CommentPrivacy {
        Anybody => "anybody",
        Contacts => "contacts",
        Nobody => "nobody",
    }
}

wire_enum! {
    /// Sort orders accepted by list and search endpoints
    SortType {
        Date => "date",
        Alphabetical => "alphabetical",
        Plays => "plays",
        Likes => "likes",
        Comments => "comments",
        Duration => "duration",
        Relevant => "relevant",
        ModifiedTime => "modified_time",
    }
}

wire_enum! {
    /// Sort direction for list and search endpoints
    SortDirection {
        Ascending => "asc",
        Descending => "desc",
    }
}

wire_enum! {
    /// Resource category targeted by a search query
    SearchFilterType {
        Video => "clip",
        User => "people",
        Channel => "channel",
        Group => "group",
        OnDemand => "ondemand",
    }
}

wire_enum! {
    /// Upload-date window applied to a search
    SearchDateType {
        Today => "today",
        ThisWeek => "this-week",
        ThisMonth => "this-month",
        ThisYear => "this-year",
    }
}

wire_enum! {
    /// Duration bucket applied to a video search
    SearchDurationType {
        Short => "short",
        Medium => "medium",
        Long => "long",
    }
}

wire_enum! {
    /// Facet groups a search response may aggregate on
    SearchFacetType {
        Type => "type",
        Category => "category",
        Duration => "duration",
        License => "license",
        Uploaded => "uploaded",
        UserType => "user_type",
    }
}

wire_enum! {
    /// Role held by a member of a team
    TeamRole {
        Owner => "owner",
        Admin => "admin",
        Contributor => "contributor",
        Uploader => "uploader",
        Viewer => "viewer",
    }
}
