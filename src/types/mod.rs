mod builder;
mod error;
mod generator;
mod header;
mod policy;
mod term;
mod translation;
mod vendor;

pub use builder::{FilterBuilder, PolicyBuilder, TermBuilder};
pub use error::GenerateError;
pub use generator::{Generator, PROFILES, generators};
pub use header::{MatchOrder, ResolvedHeader};
pub use policy::{Filter, Header, Policy, Target};
pub use term::{AddressMatch, Field, NormalizedTerm, PortRange, Term};
pub use translation::{RenderedFilter, Translation};
pub use vendor::{HP_COMWARE, HUAWEI, HeaderSyntax, MAX_COMMENT_LEN, VendorProfile};
