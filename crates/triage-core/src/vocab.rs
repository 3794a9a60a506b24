//! Closed bilingual (French/English) vocabularies.
//!
//! These tables are data, not control flow: the extractor and analyzers
//! only ever test membership, so extending a vocabulary never touches
//! logic. Every entry is stored lower-cased and accent-folded; callers
//! must normalize through [`crate::text`] before lookup.

/// Interrogative sentence openers.
pub const INTERROGATIVES: &[&str] = &[
    "qui", "que", "quoi", "quel", "quelle", "quels", "quelles", "comment", "pourquoi", "combien",
    "ou", "quand", "what", "how", "why", "when", "where", "which", "who", "is", "are", "can", "do",
    "does", "did", "will", "would", "could", "should",
];

/// Greetings, acknowledgements, and interjections that make a message trivial.
pub const TRIVIAL_WORDS: &[&str] = &[
    "ok", "oui", "non", "yes", "no", "merci", "thanks", "super", "cool", "bien", "parfait", "good",
    "great", "nice", "top", "lol", "mdr", "haha", "salut", "hello", "hi", "bonjour", "bonsoir",
    "hey", "yo", "ciao", "d'accord", "okay", "go", "yep", "nope", "ouais", "yup", "thx", "ty",
    "np", "gg", "bravo", "genial",
];

/// First words that rule out an imperative reading: pronouns, determiners,
/// greetings, and acknowledgements.
pub const NON_ACTION_OPENERS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa",
    "ses", "ce", "cette", "ces", "the", "a", "an", "my", "your", "his", "her", "its", "our",
    "their", "this", "that", "these", "those", "je", "tu", "il", "elle", "on", "nous", "vous",
    "ils", "elles", "i", "you", "he", "she", "we", "they", "it", "ok", "oui", "non", "yes", "no",
    "merci", "thanks", "super", "cool", "bien", "parfait", "good", "great", "nice", "top", "salut",
    "hello", "hi", "bonjour", "bonsoir", "hey", "yo", "ciao",
];

/// Imperative verbs that ask for information rather than production work.
pub const COMMUNICATION_VERBS: &[&str] = &[
    "annoncer", "annonce", "dire", "dis", "montrer", "montre", "afficher", "affiche", "expliquer",
    "explique", "presenter", "presente", "tell", "show", "display", "announce", "present",
    "explain", "rappeler", "rappelle", "indiquer", "indique", "signaler", "signale", "informer",
    "informe", "notify", "inform", "remind",
];

/// Imperative verbs that ask for production work.
pub const ACTION_VERBS: &[&str] = &[
    "creer", "cree", "construire", "construis", "developper", "developpe", "implementer",
    "implemente", "deployer", "deploie", "installer", "installe", "create", "build", "develop",
    "implement", "deploy", "install", "configurer", "configure", "setup", "initialiser",
    "initialise",
];

/// Objects that mark a communication verb as genuinely informational.
pub const COMMUNICATION_OBJECTS: &[&str] = &[
    "resultat", "resultats", "info", "infos", "information", "informations", "status", "statut",
    "etat", "message", "messages", "nouvelle", "nouvelles", "update", "updates", "summary",
    "resume", "rapport", "report", "result", "results", "data", "donnees", "news",
];

/// Objects that drag even a communication verb toward production work.
pub const ACTION_OBJECTS: &[&str] = &[
    "code", "service", "services", "systeme", "system", "infrastructure", "api", "endpoint",
    "database", "server", "serveur", "application", "app", "fonction", "function", "module",
    "component", "composant",
];

/// Affirmation/negation/agreement words that open a confirmation.
pub const CONFIRMATION_STARTERS: &[&str] = &[
    "non", "oui", "si", "yes", "no", "yeah", "nope", "yep", "exactement", "exactly", "tout",
    "pas", "absolument", "absolutely", "indeed", "correct", "right", "wrong", "faux", "vrai",
    "true", "false",
];

/// Action verbs that turn a "yes"/"no" opener into a command instead of a
/// confirmation when they appear later in the message.
pub const CONFIRMATION_BREAKERS: &[&str] = &[
    "deploie", "deploy", "lance", "run", "execute", "cree", "create", "fais", "do", "make",
    "installe", "install", "configure", "setup", "supprime", "delete", "remove", "modifie",
    "modify", "change", "corrige", "fix", "debug", "teste", "test", "verifie", "check",
];

/// Single-word sequencing connectors.
pub const CONNECTORS_SINGLE: &[&str] = &[
    "puis", "ensuite", "then", "additionally", "furthermore", "egalement",
];

/// Two-word sequencing connectors.
pub const CONNECTOR_PAIRS: &[(&str, &str)] = &[
    ("et", "puis"),
    ("and", "then"),
    ("after", "that"),
    ("apres", "ca"),
    ("step", "by"),
];

/// Conditional and exception markers.
pub const CONDITIONALS: &[&str] = &[
    "si", "if", "sauf", "except", "unless", "selon", "depending", "provided",
];
