mod error;
mod expand;
mod generate;
mod normalize;
pub mod parse;
mod render;
mod types;

pub use error::AclgenError;
pub use expand::{Expansion, RuleTuple};
pub use normalize::normalize_term;
pub use render::{render_address, render_port, render_rule};
pub use types::{
    AddressMatch, Field, Filter, FilterBuilder, GenerateError, Generator, HP_COMWARE, HUAWEI,
    Header, HeaderSyntax, MAX_COMMENT_LEN, MatchOrder, NormalizedTerm, PROFILES, Policy,
    PolicyBuilder, PortRange, RenderedFilter, ResolvedHeader, Target, Term, TermBuilder,
    Translation, VendorProfile, generators,
};
