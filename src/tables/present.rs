//! Present of the indicative.

use crate::table::Table;

use super::generate::{self, BOOT};

/// Suffixes where `é` alternates with `è`, as in `céder`.
pub(super) const ACUTE: &[&str] = &[
    "ébrer", "écer", "écher", "écrer", "éder", "égler", "égner", "égrer", "éguer", "éler", "émer",
    "éner", "équer", "érer", "éser", "éter", "étrer", "évrer", "éyer",
];

/// Verbs in `-eler` and `-eter` which take `è` rather than doubling the
/// consonant.
pub(super) const MUTE_E: &[&str] = &[
    "celer",
    "ciseler",
    "démanteler",
    "écarteler",
    "encasteler",
    "geler",
    "marteler",
    "modeler",
    "peler",
    "acheter",
    "bégueter",
    "corseter",
    "crocheter",
    "fileter",
    "fureter",
    "haleter",
];

/// Endings appended to an alternating stem.
pub(super) const ALTERNATING: [&str; 6] = ["e", "es", "e", "ons", "ez", "ent"];

/// Build the complete present table.
pub(super) fn table() -> Table {
    let mut table = group1();
    table.merge(generate::acute_alternation(ACUTE, ALTERNATING, BOOT));
    table.merge(generate::mute_e_alternation(MUTE_E, ALTERNATING, BOOT));
    table.merge(group2());
    table.merge(group3());
    table
}

/// Verbs in `-er`.
#[rustfmt::skip]
pub(super) fn group1() -> Table {
    table! {
        "appeler" => ["appelle", "appelles", "appelle", "appelons", "appelez", "appellent"],
        "evrer" => ["èvre", "èvres", "èvre", "evrons", "evrez", "èvrent"],
        "emer" => ["ème", "èmes", "ème", "emons", "emez", "èment"],
        "ener" => ["ène", "ènes", "ène", "enons", "enez", "ènent"],
        "eper" => ["èpe", "èpes", "èpe", "epons", "epez", "èpent"],
        "erer" => ["ère", "ères", "ère", "erons", "erez", "èrent"],
        "eser" => ["èse", "èses", "èse", "esons", "esez", "èsent"],
        "ever" => ["ève", "èves", "ève", "evons", "evez", "èvent"],
        "oyer" => ["oie", "oies", "oie", "oyons", "oyez", "oient"],
        "uyer" => ["uie", "uies", "uie", "uyons", "uyez", "uient"],
        "ecer" => ["èce", "èces", "èce", "eçons", "ecez", "ècent"],
        "eler" => ["elle", "elles", "elle", "elons", "elez", "ellent"],
        "eter" => ["ette", "ettes", "ette", "etons", "etez", "ettent"],
        "cer" => ["ce", "ces", "ce", "çons", "cez", "cent"],
        "ger" => ["ge", "ges", "ge", "geons", "gez", "gent"],
        "er" => ["e", "es", "e", "ons", "ez", "ent"],
    }
}

/// Verbs in `-ir` with an `-issons` plural.
#[rustfmt::skip]
pub(super) fn group2() -> Table {
    table! {
        "ir" => ["is", "is", "it", "issons", "issez", "issent"],
        "ïr" => ["is", "is", "ït", "ïssons", "ïssez", "ïssent"],
    }
}

/// Irregular verbs, keyed by the shortest suffix shared by the verbs which
/// conjugate alike.
#[rustfmt::skip]
pub(super) fn group3() -> Table {
    table! {
        "aillir" => ["aux", "aux", "aut", "aillons", "aillez", "aillent"],
        "aindre" => ["ains", "ains", "aint", "aignons", "aignez", "aignent"],
        "aller" => ["vais", "vas", "va", "allons", "allez", "vont"],
        "asseoir" => ["assieds", "assieds", "assied", "asseyons", "asseyez", "asseyent"],
        "astreindre" => ["astreins", "astreins", "astreint", "astreignons", "astreignez", "astreignent"],
        "avoir" => ["ai", "as", "a", "avons", "avez", "ont"],
        "battre" => ["bats", "bats", "bat", "battons", "battez", "battent"],
        "boire" => ["bois", "bois", "boit", "buvons", "buvez", "boivent"],
        "bouillir" => ["bous", "bous", "bout", "bouillons", "bouillez", "bouillent"],
        "cevoir" => ["çois", "çois", "çoit", "cevons", "cevez", "çoivent"],
        "choir" => ["chois", "chois", "choit", "choyons", "choyez", "choient"],
        "circoncire" => ["circoncis", "circoncis", "circoncit", "circoncisons", "circoncisez", "circoncisent"],
        "clore" => ["clos", "clos", "clôt", _, _, "closent"],
        "clure" => ["clus", "clus", "clut", "cluons", "cluez", "cluent"],
        "confire" => ["confis", "confis", "confit", "confisons", "confisez", "confisent"],
        "coudre" => ["couds", "couds", "coud", "cousons", "cousez", "cousent"],
        "courir" => ["cours", "cours", "court", "courons", "courez", "courent"],
        "croire" => ["crois", "crois", "croit", "croyons", "croyez", "croient"],
        "croître" => ["croîs", "croîs", "croît", "croissons", "croissez", "croissent"],
        "cueillir" => ["cueille", "cueilles", "cueille", "cueillons", "cueillez", "cueillent"],
        "descendre" => ["descends", "descends", "descend", "descendons", "descendez", "descendent"],
        "devoir" => ["dois", "dois", "doit", "devons", "devez", "doivent"],
        "dire" => ["dis", "dis", "dit", "disons", "dites", "disent"],
        "dormir" => ["dors", "dors", "dort", "dormons", "dormez", "dorment"],
        "écrire" => ["écris", "écris", "écrit", "écrivons", "écrivez", "écrivent"],
        "eindre" => ["eins", "eins", "eint", "eignons", "eignez", "eignent"],
        "épandre" => ["épands", "épands", "épand", "épandons", "épandez", "épandent"],
        "être" => ["suis", "es", "est", "sommes", "êtes", "sont"],
        "faire" => ["fais", "fais", "fait", "faisons", "faites", "font"],
        "falloir" => [_, _, "faut", _, _, _],
        "fendre" => ["fends", "fends", "fend", "fendons", "fendez", "fendent"],
        "fondre" => ["fonds", "fonds", "fond", "fondons", "fondez", "fondent"],
        "foutre" => ["fous", "fous", "fout", "foutons", "foutez", "foutent"],
        "frire" => ["fris", "fris", "frit", _, _, _],
        "fuir" => ["fuis", "fuis", "fuit", "fuyons", "fuyez", "fuient"],
        "gésir" => ["gis", "gis", "gît", "gisons", "gisez", "gisent"],
        "joindre" => ["joins", "joins", "joint", "joignons", "joignez", "joignent"],
        "lire" => ["lis", "lis", "lit", "lisons", "lisez", "lisent"],
        "mentir" => ["mens", "mens", "ment", "mentons", "mentez", "mentent"],
        "mettre" => ["mets", "mets", "met", "mettons", "mettez", "mettent"],
        "mordre" => ["mords", "mords", "mord", "mordons", "mordez", "mordent"],
        "moudre" => ["mouds", "mouds", "moud", "moulons", "moulez", "moulent"],
        "mourir" => ["meurs", "meurs", "meurt", "mourons", "mourez", "meurent"],
        "mouvoir" => ["meus", "meus", "meut", "mouvons", "mouvez", "meuvent"],
        "naître" => ["nais", "nais", "naît", "naissons", "naissez", "naissent"],
        "offrir" => ["offre", "offres", "offre", "offrons", "offrez", "offrent"],
        "oindre" => ["oins", "oins", "oint", "oignons", "oignez", "oignent"],
        "ouïr" => ["ois", "ois", "oit", "oyons", "oyez", "oient"],
        "ouvrir" => ["ouvre", "ouvres", "ouvre", "ouvrons", "ouvrez", "ouvrent"],
        "paître" => ["pais", "pais", "paît", "paissons", "paissez", "paissent"],
        "paraître" => ["parais", "parais", "paraît", "paraissons", "paraissez", "paraissent"],
        "partir" => ["pars", "pars", "part", "partons", "partez", "partent"],
        "pendre" => ["pends", "pends", "pend", "pendons", "pendez", "pendent"],
        "perdre" => ["perds", "perds", "perd", "perdons", "perdez", "perdent"],
        "plaire" => ["plais", "plais", "plaît", "plaisons", "plaisez", "plaisent"],
        "pleuvoir" => [_, _, "pleut", _, _, "pleuvent"],
        "poindre" => [_, _, "point", _, _, "poignent"],
        "pondre" => ["ponds", "ponds", "pond", "pondons", "pondez", "pondent"],
        "pouvoir" => ["peux", "peux", "peut", "pouvons", "pouvez", "peuvent"],
        "prendre" => ["prends", "prends", "prend", "prenons", "prenez", "prennent"],
        "prévoir" => ["prévois", "prévois", "prévoit", "prévoyons", "prévoyez", "prévoient"],
        "quérir" => ["quiers", "quiers", "quiert", "quérons", "quérez", "quièrent"],
        "raire" => ["rais", "rais", "rait", "rayons", "rayez", "raient"],
        "rendre" => ["rends", "rends", "rend", "rendons", "rendez", "rendent"],
        "repentir" => ["repens", "repens", "repent", "repentons", "repentez", "repentent"],
        "rire" => ["ris", "ris", "rit", "rions", "riez", "rient"],
        "rompre" => ["romps", "romps", "rompt", "rompons", "rompez", "rompent"],
        "saillir" => ["saille", "sailles", "saille", "saillons", "saillez", "saillent"],
        "savoir" => ["sais", "sais", "sait", "savons", "savez", "savent"],
        "scrire" => ["scris", "scris", "scrit", "scrivons", "scrivez", "scrivent"],
        "sentir" => ["sens", "sens", "sent", "sentons", "sentez", "sentent"],
        "servir" => ["sers", "sers", "sert", "servons", "servez", "servent"],
        "seoir" => [_, _, "sied", _, _, "siéent"],
        "suivre" => ["suis", "suis", "suit", "suivons", "suivez", "suivent"],
        "sortir" => ["sors", "sors", "sort", "sortons", "sortez", "sortent"],
        "soudre" => ["sous", "sous", "sout", "solvons", "solvez", "solvent"],
        "souffrir" => ["souffre", "souffres", "souffre", "souffrons", "souffrez", "souffrent"],
        "suffire" => ["suffis", "suffis", "suffit", "suffisons", "suffisez", "suffisent"],
        "surseoir" => ["sursois", "sursois", "sursoit", "sursoyons", "sursoyez", "sursoient"],
        "taire" => ["tais", "tais", "tait", "taisons", "taisez", "taisent"],
        "tendre" => ["tends", "tends", "tend", "tendons", "tendez", "tendent"],
        "tenir" => ["tiens", "tiens", "tient", "tenons", "tenez", "tiennent"],
        "tondre" => ["tonds", "tonds", "tond", "tondons", "tondez", "tondent"],
        "tordre" => ["tords", "tords", "tord", "tordons", "tordez", "tordent"],
        "uire" => ["uis", "uis", "uit", "uisons", "uisez", "uisent"],
        "vaincre" => ["vaincs", "vaincs", "vainc", "vainquons", "vainquez", "vainquent"],
        "valoir" => ["vaux", "vaux", "vaut", "valons", "valez", "valent"],
        "vendre" => ["vends", "vends", "vend", "vendons", "vendez", "vendent"],
        "venir" => ["viens", "viens", "vient", "venons", "venez", "viennent"],
        "vêtir" => ["vêts", "vêts", "vêt", "vêtons", "vêtez", "vêtent"],
        "vivre" => ["vis", "vis", "vit", "vivons", "vivez", "vivent"],
        "voir" => ["vois", "vois", "voit", "voyons", "voyez", "voient"],
        "vouloir" => ["veux", "veux", "veut", "voulons", "voulez", "veulent"],
    }
}
