//! Writing-system drills for languages with non-Latin scripts.

/// One symbol and how it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterSymbol {
    pub symbol: &'static str,
    pub romanization: &'static str,
}

/// A named drill set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub characters: &'static [CharacterSymbol],
}

impl CharacterGroup {
    /// Symbols to focus a lesson on.
    pub fn symbols(&self) -> Vec<String> {
        self.characters.iter().map(|c| c.symbol.to_string()).collect()
    }
}

const fn sym(symbol: &'static str, romanization: &'static str) -> CharacterSymbol {
    CharacterSymbol {
        symbol,
        romanization,
    }
}

const JAPANESE: &[CharacterGroup] = &[
    CharacterGroup {
        id: "hiragana_basic_1",
        name: "Hiragana: Vowels & K",
        characters: &[
            sym("あ", "a"),
            sym("い", "i"),
            sym("う", "u"),
            sym("え", "e"),
            sym("お", "o"),
            sym("か", "ka"),
            sym("き", "ki"),
            sym("く", "ku"),
            sym("け", "ke"),
            sym("こ", "ko"),
        ],
    },
    CharacterGroup {
        id: "hiragana_basic_2",
        name: "Hiragana: S & T",
        characters: &[
            sym("さ", "sa"),
            sym("し", "shi"),
            sym("す", "su"),
            sym("せ", "se"),
            sym("そ", "so"),
            sym("た", "ta"),
            sym("ち", "chi"),
            sym("つ", "tsu"),
            sym("て", "te"),
            sym("と", "to"),
        ],
    },
    CharacterGroup {
        id: "katakana_basic",
        name: "Katakana: Vowels & K",
        characters: &[
            sym("ア", "a"),
            sym("イ", "i"),
            sym("ウ", "u"),
            sym("エ", "e"),
            sym("オ", "o"),
            sym("カ", "ka"),
            sym("キ", "ki"),
            sym("ク", "ku"),
            sym("ケ", "ke"),
            sym("コ", "ko"),
        ],
    },
];

const KOREAN: &[CharacterGroup] = &[
    CharacterGroup {
        id: "hangul_vowels",
        name: "Hangul: Basic Vowels",
        characters: &[
            sym("ㅏ", "a"),
            sym("ㅑ", "ya"),
            sym("ㅓ", "eo"),
            sym("ㅕ", "yeo"),
            sym("ㅗ", "o"),
            sym("ㅛ", "yo"),
            sym("ㅜ", "u"),
            sym("ㅠ", "yu"),
            sym("ㅡ", "eu"),
            sym("ㅣ", "i"),
        ],
    },
    CharacterGroup {
        id: "hangul_consonants",
        name: "Hangul: Basic Consonants",
        characters: &[
            sym("ㄱ", "g/k"),
            sym("ㄴ", "n"),
            sym("ㄷ", "d/t"),
            sym("ㄹ", "r/l"),
            sym("ㅁ", "m"),
            sym("ㅂ", "b/p"),
            sym("ㅅ", "s"),
            sym("ㅇ", "ng"),
            sym("ㅈ", "j"),
            sym("ㅎ", "h"),
        ],
    },
];

const CHINESE: &[CharacterGroup] = &[
    CharacterGroup {
        id: "zh_numbers",
        name: "Numbers (1-10)",
        characters: &[
            sym("一", "yī"),
            sym("二", "èr"),
            sym("三", "sān"),
            sym("四", "sì"),
            sym("五", "wǔ"),
            sym("六", "liù"),
            sym("七", "qī"),
            sym("八", "bā"),
            sym("九", "jiǔ"),
            sym("十", "shí"),
        ],
    },
    CharacterGroup {
        id: "zh_nature",
        name: "Nature Characters",
        characters: &[
            sym("日", "rì (sun)"),
            sym("月", "yuè (moon)"),
            sym("山", "shān (mountain)"),
            sym("水", "shuǐ (water)"),
            sym("火", "huǒ (fire)"),
            sym("木", "mù (wood)"),
            sym("人", "rén (person)"),
            sym("天", "tiān (sky)"),
        ],
    },
];

const RUSSIAN: &[CharacterGroup] = &[
    CharacterGroup {
        id: "ru_basic",
        name: "Cyrillic: Basic Letters",
        characters: &[
            sym("А", "a"),
            sym("Б", "b"),
            sym("В", "v"),
            sym("Г", "g"),
            sym("Д", "d"),
            sym("Е", "ye"),
            sym("Ё", "yo"),
            sym("Ж", "zh"),
            sym("З", "z"),
            sym("И", "i"),
        ],
    },
    CharacterGroup {
        id: "ru_basic_2",
        name: "Cyrillic: Part 2",
        characters: &[
            sym("Й", "y"),
            sym("К", "k"),
            sym("Л", "l"),
            sym("М", "m"),
            sym("Н", "n"),
            sym("О", "o"),
            sym("П", "p"),
            sym("Р", "r"),
            sym("С", "s"),
            sym("Т", "t"),
        ],
    },
];

const GREEK: &[CharacterGroup] = &[CharacterGroup {
    id: "el_alpha",
    name: "Greek Alphabet",
    characters: &[
        sym("Α", "Alpha"),
        sym("Β", "Beta"),
        sym("Γ", "Gamma"),
        sym("Δ", "Delta"),
        sym("Ε", "Epsilon"),
        sym("Ζ", "Zeta"),
        sym("Η", "Eta"),
        sym("Θ", "Theta"),
        sym("Ι", "Iota"),
        sym("Κ", "Kappa"),
    ],
}];

const HEBREW: &[CharacterGroup] = &[CharacterGroup {
    id: "he_alpha",
    name: "Hebrew Alef-Bet",
    characters: &[
        sym("א", "Alef"),
        sym("ב", "Bet"),
        sym("ג", "Gimel"),
        sym("ד", "Dalet"),
        sym("ה", "He"),
        sym("ו", "Vav"),
        sym("ז", "Zayin"),
        sym("ח", "Het"),
        sym("ט", "Tet"),
        sym("י", "Yod"),
    ],
}];

const ARABIC: &[CharacterGroup] = &[CharacterGroup {
    id: "ar_alpha",
    name: "Arabic Letters 1",
    characters: &[
        sym("ا", "alif"),
        sym("ب", "ba"),
        sym("ت", "ta"),
        sym("ث", "tha"),
        sym("ج", "jim"),
        sym("ح", "ha"),
        sym("خ", "kha"),
        sym("د", "dal"),
        sym("ذ", "dhal"),
        sym("ر", "ra"),
    ],
}];

const HINDI: &[CharacterGroup] = &[CharacterGroup {
    id: "hi_vowels",
    name: "Hindi Vowels",
    characters: &[
        sym("अ", "a"),
        sym("आ", "aa"),
        sym("इ", "i"),
        sym("ई", "ee"),
        sym("उ", "u"),
        sym("ऊ", "oo"),
        sym("ऋ", "ri"),
        sym("ए", "e"),
        sym("ऐ", "ai"),
        sym("ओ", "o"),
    ],
}];

/// Drill groups for a language, empty when it uses the Latin script.
pub fn character_groups(language_code: &str) -> &'static [CharacterGroup] {
    match language_code {
        "ja" => JAPANESE,
        "ko" => KOREAN,
        "zh" => CHINESE,
        "ru" => RUSSIAN,
        "el" => GREEK,
        "he" => HEBREW,
        "ar" => ARABIC,
        "hi" => HINDI,
        _ => &[],
    }
}

/// Find one group by id within a language.
pub fn find_group(language_code: &str, group_id: &str) -> Option<&'static CharacterGroup> {
    character_groups(language_code)
        .iter()
        .find(|g| g.id == group_id)
}
