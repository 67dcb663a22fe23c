//! Static content catalogs: languages and writing-system drills.

pub mod characters;
pub mod languages;

pub use characters::{character_groups, find_group, CharacterGroup, CharacterSymbol};
pub use languages::{find_language, language_name, Language, LANGUAGES};
