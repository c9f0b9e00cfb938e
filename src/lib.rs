//! Foodlore – an in-memory knowledge base of crop and food history.
//!
//! Foodlore holds a read-only dataset of crops and foods, each with an origin
//! event and zero or more geographic spread events carrying exact or
//! approximate dates, and exposes query surfaces over it:
//! * The [`store::EntityStore`] owns all records and answers id lookups,
//!   category filters, location hierarchy traversal and origin/ingredient
//!   reverse lookups.
//! * The [`chronicle::Chronicle`] derives one consolidated, chronologically
//!   sorted event timeline, normalizing heterogeneous date text into numeric
//!   years through an ordered rule table, and offers era buckets, filtering,
//!   grouping and statistics over it.
//! * [`search::search`] scans the store for case-insensitive substring
//!   matches on ids, names and aliases.
//! * The [`lang::Localizer`] resolves every bilingual text pair against a
//!   mutable current-language selector with a uniform fallback to the
//!   primary language.
//!
//! ## Modules
//! * [`model`] – the record types the data directory supplies.
//! * [`store`] – ownership of the records plus the lookup indexes.
//! * [`chronicle`] – timeline derivation, fuzzy year parsing, eras, queries.
//! * [`search`] – the substring search scan.
//! * [`lang`] – bilingual resolution and language persistence.
//! * [`loader`] – startup loading of the JSON documents.
//! * [`settings`] – layered configuration for the binary.
//!
//! ## Quick Start
//! ```
//! use foodlore::chronicle::parse_year;
//! // exact BCE marker, mid-century and mid-decade heuristics
//! assert_eq!(parse_year("公元前3000年"), Some(-3000));
//! assert_eq!(parse_year("16世纪"), Some(1550));
//! assert_eq!(parse_year("1920年代"), Some(1925));
//! ```
//!
//! The dataset is read-only for the process lifetime; the only mutable state
//! is the language selector, and the timeline is memoized after its first
//! build. There are no fatal error conditions in the query surfaces: absence
//! is `None` or empty, unresolvable dates simply produce no event, and
//! missing alternate-language text falls back to the primary text.

pub mod chronicle;
pub mod error;
pub mod lang;
pub mod loader;
pub mod model;
pub mod search;
pub mod settings;
pub mod store;
