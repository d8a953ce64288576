//! The canonical PGP word list and its lookup table.

use std::collections::HashMap;

/// The two words assigned to one byte value.
///
/// The even word is spoken when the byte sits at an even (0-indexed)
/// position in the fingerprint, the odd word at odd positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPair {
    even: &'static str,
    odd: &'static str,
}

impl WordPair {
    const fn new(even: &'static str, odd: &'static str) -> Self {
        Self { even, odd }
    }

    /// Word for even-indexed positions.
    pub const fn even_word(self) -> &'static str {
        self.even
    }

    /// Word for odd-indexed positions.
    pub const fn odd_word(self) -> &'static str {
        self.odd
    }
}

/// The published PGP Word List, indexed by byte value.
///
/// Compatibility-critical reference data, reproduced verbatim from the
/// standardized list. Canonical casing is preserved ("Algol", "Istanbul");
/// lookups lowercase their input instead.
static WORD_PAIRS: [WordPair; 256] = [
    // 0x00
    WordPair::new("aardvark", "adroitness"),
    WordPair::new("absurd", "adviser"),
    WordPair::new("accrue", "aftermath"),
    WordPair::new("acme", "aggregate"),
    WordPair::new("adrift", "alkali"),
    WordPair::new("adult", "almighty"),
    WordPair::new("afflict", "amulet"),
    WordPair::new("ahead", "amusement"),
    WordPair::new("aimless", "antenna"),
    WordPair::new("Algol", "applicant"),
    WordPair::new("allow", "Apollo"),
    WordPair::new("alone", "armistice"),
    WordPair::new("ammo", "article"),
    WordPair::new("ancient", "asteroid"),
    WordPair::new("apple", "Atlantic"),
    WordPair::new("artist", "atmosphere"),
    // 0x10
    WordPair::new("assume", "autopsy"),
    WordPair::new("Athens", "Babylon"),
    WordPair::new("atlas", "backwater"),
    WordPair::new("Aztec", "barbecue"),
    WordPair::new("baboon", "belowground"),
    WordPair::new("backfield", "bifocals"),
    WordPair::new("backward", "bodyguard"),
    WordPair::new("banjo", "bookseller"),
    WordPair::new("beaming", "borderline"),
    WordPair::new("bedlamp", "bottomless"),
    WordPair::new("beehive", "Bradbury"),
    WordPair::new("beeswax", "bravado"),
    WordPair::new("befriend", "Brazilian"),
    WordPair::new("Belfast", "breakaway"),
    WordPair::new("berserk", "Burlington"),
    WordPair::new("billiard", "businessman"),
    // 0x20
    WordPair::new("bison", "butterfat"),
    WordPair::new("blackjack", "Camelot"),
    WordPair::new("blockade", "candidate"),
    WordPair::new("blowtorch", "cannonball"),
    WordPair::new("bluebird", "Capricorn"),
    WordPair::new("bombast", "caravan"),
    WordPair::new("bookshelf", "caretaker"),
    WordPair::new("brackish", "celebrate"),
    WordPair::new("breadline", "cellulose"),
    WordPair::new("breakup", "certify"),
    WordPair::new("brickyard", "chambermaid"),
    WordPair::new("briefcase", "Cherokee"),
    WordPair::new("Burbank", "Chicago"),
    WordPair::new("button", "clergyman"),
    WordPair::new("buzzard", "coherence"),
    WordPair::new("cement", "combustion"),
    // 0x30
    WordPair::new("chairlift", "commando"),
    WordPair::new("chatter", "company"),
    WordPair::new("checkup", "component"),
    WordPair::new("chisel", "concurrent"),
    WordPair::new("choking", "confidence"),
    WordPair::new("chopper", "conformist"),
    WordPair::new("Christmas", "congregate"),
    WordPair::new("clamshell", "consensus"),
    WordPair::new("classic", "consulting"),
    WordPair::new("classroom", "corporate"),
    WordPair::new("cleanup", "corrosion"),
    WordPair::new("clockwork", "councilman"),
    WordPair::new("cobra", "crossover"),
    WordPair::new("commence", "crucifix"),
    WordPair::new("concert", "cumbersome"),
    WordPair::new("cowbell", "customer"),
    // 0x40
    WordPair::new("crackdown", "Dakota"),
    WordPair::new("cranky", "decadence"),
    WordPair::new("crowfoot", "December"),
    WordPair::new("crucial", "decimal"),
    WordPair::new("crumpled", "designing"),
    WordPair::new("crusade", "detector"),
    WordPair::new("cubic", "detergent"),
    WordPair::new("dashboard", "determine"),
    WordPair::new("deadbolt", "dictator"),
    WordPair::new("deckhand", "dinosaur"),
    WordPair::new("dogsled", "direction"),
    WordPair::new("dragnet", "disable"),
    WordPair::new("drainage", "disbelief"),
    WordPair::new("dreadful", "disruptive"),
    WordPair::new("drifter", "distortion"),
    WordPair::new("dropper", "document"),
    // 0x50
    WordPair::new("drumbeat", "embezzle"),
    WordPair::new("drunken", "enchanting"),
    WordPair::new("Dupont", "enrollment"),
    WordPair::new("dwelling", "enterprise"),
    WordPair::new("eating", "equation"),
    WordPair::new("edict", "equipment"),
    WordPair::new("egghead", "escapade"),
    WordPair::new("eightball", "Eskimo"),
    WordPair::new("endorse", "everyday"),
    WordPair::new("endow", "examine"),
    WordPair::new("enlist", "existence"),
    WordPair::new("erase", "exodus"),
    WordPair::new("escape", "fascinate"),
    WordPair::new("exceed", "filament"),
    WordPair::new("eyeglass", "finicky"),
    WordPair::new("eyetooth", "forever"),
    // 0x60
    WordPair::new("facial", "fortitude"),
    WordPair::new("fallout", "frequency"),
    WordPair::new("flagpole", "gadgetry"),
    WordPair::new("flatfoot", "Galveston"),
    WordPair::new("flytrap", "getaway"),
    WordPair::new("fracture", "glossary"),
    WordPair::new("framework", "gossamer"),
    WordPair::new("freedom", "graduate"),
    WordPair::new("frighten", "gravity"),
    WordPair::new("gazelle", "guitarist"),
    WordPair::new("Geiger", "hamburger"),
    WordPair::new("glitter", "Hamilton"),
    WordPair::new("glucose", "handiwork"),
    WordPair::new("goggles", "hazardous"),
    WordPair::new("goldfish", "headwaters"),
    WordPair::new("gremlin", "hemisphere"),
    // 0x70
    WordPair::new("guidance", "hesitate"),
    WordPair::new("hamlet", "hideaway"),
    WordPair::new("highchair", "holiness"),
    WordPair::new("hockey", "hurricane"),
    WordPair::new("indoors", "hydraulic"),
    WordPair::new("indulge", "impartial"),
    WordPair::new("inverse", "impetus"),
    WordPair::new("involve", "inception"),
    WordPair::new("island", "indigo"),
    WordPair::new("jawbone", "inertia"),
    WordPair::new("keyboard", "infancy"),
    WordPair::new("kickoff", "inferno"),
    WordPair::new("kiwi", "informant"),
    WordPair::new("klaxon", "insincere"),
    WordPair::new("locale", "insurgent"),
    WordPair::new("lockup", "integrate"),
    // 0x80
    WordPair::new("merit", "intention"),
    WordPair::new("minnow", "inventive"),
    WordPair::new("miser", "Istanbul"),
    WordPair::new("Mohawk", "Jamaica"),
    WordPair::new("mural", "Jupiter"),
    WordPair::new("music", "leprosy"),
    WordPair::new("necklace", "letterhead"),
    WordPair::new("Neptune", "liberty"),
    WordPair::new("newborn", "maritime"),
    WordPair::new("nightbird", "matchmaker"),
    WordPair::new("Oakland", "maverick"),
    WordPair::new("obtuse", "Medusa"),
    WordPair::new("offload", "megaton"),
    WordPair::new("optic", "microscope"),
    WordPair::new("orca", "microwave"),
    WordPair::new("payday", "midsummer"),
    // 0x90
    WordPair::new("peachy", "millionaire"),
    WordPair::new("pheasant", "miracle"),
    WordPair::new("physique", "misnomer"),
    WordPair::new("playhouse", "molasses"),
    WordPair::new("Pluto", "molecule"),
    WordPair::new("preclude", "Montana"),
    WordPair::new("prefer", "monument"),
    WordPair::new("preshrunk", "mosquito"),
    WordPair::new("printer", "narrative"),
    WordPair::new("prowler", "nebula"),
    WordPair::new("pupil", "newsletter"),
    WordPair::new("puppy", "Norwegian"),
    WordPair::new("python", "October"),
    WordPair::new("quadrant", "Ohio"),
    WordPair::new("quiver", "onlooker"),
    WordPair::new("quota", "opulent"),
    // 0xA0
    WordPair::new("ragtime", "Orlando"),
    WordPair::new("ratchet", "outfielder"),
    WordPair::new("rebirth", "Pacific"),
    WordPair::new("reform", "pandemic"),
    WordPair::new("regain", "Pandora"),
    WordPair::new("reindeer", "paperweight"),
    WordPair::new("rematch", "paragon"),
    WordPair::new("repay", "paragraph"),
    WordPair::new("retouch", "paramount"),
    WordPair::new("revenge", "passenger"),
    WordPair::new("reward", "pedigree"),
    WordPair::new("rhythm", "Pegasus"),
    WordPair::new("ribcage", "penetrate"),
    WordPair::new("ringbolt", "perceptive"),
    WordPair::new("robust", "performance"),
    WordPair::new("rocker", "pharmacy"),
    // 0xB0
    WordPair::new("ruffled", "phonetic"),
    WordPair::new("sailboat", "photograph"),
    WordPair::new("sawdust", "pioneer"),
    WordPair::new("scallion", "pocketful"),
    WordPair::new("scenic", "politeness"),
    WordPair::new("scorecard", "positive"),
    WordPair::new("Scotland", "potato"),
    WordPair::new("seabird", "processor"),
    WordPair::new("select", "provincial"),
    WordPair::new("sentence", "proximate"),
    WordPair::new("shadow", "puberty"),
    WordPair::new("shamrock", "publisher"),
    WordPair::new("showgirl", "pyramid"),
    WordPair::new("skullcap", "quantity"),
    WordPair::new("skydive", "racketeer"),
    WordPair::new("slingshot", "rebellion"),
    // 0xC0
    WordPair::new("slowdown", "recipe"),
    WordPair::new("snapline", "recover"),
    WordPair::new("snapshot", "repellent"),
    WordPair::new("snowcap", "replica"),
    WordPair::new("snowslide", "reproduce"),
    WordPair::new("solo", "resistor"),
    WordPair::new("southward", "responsive"),
    WordPair::new("soybean", "retraction"),
    WordPair::new("spaniel", "retrieval"),
    WordPair::new("spearhead", "retrospect"),
    WordPair::new("spellbind", "revenue"),
    WordPair::new("spheroid", "revival"),
    WordPair::new("spigot", "revolver"),
    WordPair::new("spindle", "sandalwood"),
    WordPair::new("spyglass", "sardonic"),
    WordPair::new("stagehand", "Saturday"),
    // 0xD0
    WordPair::new("stagnate", "savagery"),
    WordPair::new("stairway", "scavenger"),
    WordPair::new("standard", "sensation"),
    WordPair::new("stapler", "sociable"),
    WordPair::new("steamship", "souvenir"),
    WordPair::new("sterling", "specialist"),
    WordPair::new("stockman", "speculate"),
    WordPair::new("stopwatch", "stethoscope"),
    WordPair::new("stormy", "stupendous"),
    WordPair::new("sugar", "supportive"),
    WordPair::new("surmount", "surrender"),
    WordPair::new("suspense", "suspicious"),
    WordPair::new("sweatband", "sympathy"),
    WordPair::new("swelter", "tambourine"),
    WordPair::new("tactics", "telephone"),
    WordPair::new("talon", "therapist"),
    // 0xE0
    WordPair::new("tapeworm", "tobacco"),
    WordPair::new("tempest", "tolerance"),
    WordPair::new("tiger", "tomorrow"),
    WordPair::new("tissue", "torpedo"),
    WordPair::new("tonic", "tradition"),
    WordPair::new("topmost", "travesty"),
    WordPair::new("tracker", "trombonist"),
    WordPair::new("transit", "truncated"),
    WordPair::new("trauma", "typewriter"),
    WordPair::new("treadmill", "ultimate"),
    WordPair::new("Trojan", "undaunted"),
    WordPair::new("trouble", "underfoot"),
    WordPair::new("tumor", "unicorn"),
    WordPair::new("tunnel", "unify"),
    WordPair::new("tycoon", "universe"),
    WordPair::new("uncut", "unravel"),
    // 0xF0
    WordPair::new("unearth", "upcoming"),
    WordPair::new("unwind", "vacancy"),
    WordPair::new("uproot", "vagabond"),
    WordPair::new("upset", "vertigo"),
    WordPair::new("upshot", "Virginia"),
    WordPair::new("vapor", "visitor"),
    WordPair::new("village", "vocalist"),
    WordPair::new("virus", "voyager"),
    WordPair::new("Vulcan", "warranty"),
    WordPair::new("waffle", "Waterloo"),
    WordPair::new("wallet", "whimsical"),
    WordPair::new("watchword", "Wichita"),
    WordPair::new("wayside", "Wilmington"),
    WordPair::new("willow", "Wyoming"),
    WordPair::new("woodlark", "yesteryear"),
    WordPair::new("Zulu", "Yucatan"),
];

/// Bidirectional lookup over the canonical word list.
///
/// The forward direction is the `WORD_PAIRS` array itself; `new()` builds
/// the reverse index (lowercased word -> byte value) from the same array in
/// byte-value order, so the two directions cannot drift apart. Immutable
/// after construction and safe to share across threads by reference.
pub struct WordTable {
    byte_by_word: HashMap<String, u8>,
}

impl WordTable {
    /// Build the reverse index from the canonical list.
    pub fn new() -> Self {
        let mut byte_by_word = HashMap::with_capacity(512);
        for (value, pair) in WORD_PAIRS.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)] // 256 entries, indices fit in u8
            let value = value as u8;
            byte_by_word.insert(pair.even.to_lowercase(), value);
            byte_by_word.insert(pair.odd.to_lowercase(), value);
        }
        Self { byte_by_word }
    }

    /// Look up the word pair for a byte value.
    ///
    /// Takes a widened integer so out-of-range probes (-1, 256, 0x101) are
    /// expressible; they return `None`, a dictionary miss rather than an
    /// error.
    pub fn words_for_byte(&self, value: i32) -> Option<WordPair> {
        u8::try_from(value).ok().map(|value| self.pair_for_byte(value))
    }

    /// Look up the word pair for a byte. Total: every `u8` has an entry.
    #[allow(clippy::unused_self)] // lookup lives on the table for API symmetry
    pub fn pair_for_byte(&self, value: u8) -> WordPair {
        WORD_PAIRS[usize::from(value)]
    }

    /// Look up the byte value for a word, case-insensitively.
    ///
    /// Unrecognized (or empty) input is `None`, not an error: membership
    /// probing is a valid query at this layer.
    pub fn byte_for_word(&self, word: &str) -> Option<u8> {
        self.byte_by_word.get(&word.to_lowercase()).copied()
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::new()
    }
}
