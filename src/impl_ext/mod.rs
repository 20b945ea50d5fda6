// Crate-internal.
// ---

pub(crate) mod inference {
    pub(crate) mod config;
    pub(crate) mod http_endpoint;
    pub(crate) mod narrator;
    mod prompt;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod inference {
        pub use crate::impl_ext::inference::config::*;
        pub use crate::impl_ext::inference::http_endpoint::*;
        pub use crate::impl_ext::inference::narrator::*;
    }
}
