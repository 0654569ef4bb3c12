//! Simple past of the indicative.

use crate::table::Table;

/// Build the complete simple past table.
pub(super) fn table() -> Table {
    let mut table = group1();
    table.merge(group2());
    table.merge(group3());
    table
}

/// Verbs in `-er`.
#[rustfmt::skip]
pub(super) fn group1() -> Table {
    table! {
        "cer" => ["çai", "ças", "ça", "çâmes", "çâtes", "cèrent"],
        "ecer" => ["eçai", "eças", "eça", "eçâmes", "eçâtes", "ecèrent"],
        "écer" => ["éçai", "éças", "éça", "éçâmes", "éçâtes", "écèrent"],
        "ger" => ["geai", "geas", "gea", "geâmes", "geâtes", "gèrent"],
        "er" => ["ai", "as", "a", "âmes", "âtes", "èrent"],
    }
}

/// Verbs in `-ir` with an `-issons` plural.
#[rustfmt::skip]
pub(super) fn group2() -> Table {
    table! {
        "ir" => ["is", "is", "it", "îmes", "îtes", "irent"],
        "ïr" => ["ïs", "ïs", "ït", "ïmes", "ïtes", "ïrent"],
    }
}

/// Irregular verbs. Defective verbs without a simple past are registered
/// without forms so that no shorter suffix applies to them.
#[rustfmt::skip]
pub(super) fn group3() -> Table {
    table! {
        "aindre" => ["aignis", "aignis", "aignit", "aignîmes", "aignîtes", "aignirent"],
        "aître" => ["us", "us", "ut", "ûmes", "ûtes", "urent"],
        "asseoir" => ["assis", "assis", "assit", "assîmes", "assîtes", "assirent"],
        "avoir" => ["eus", "eus", "eut", "eûmes", "eûtes", "eurent"],
        "boire" => ["bus", "bus", "but", "bûmes", "bûtes", "burent"],
        "cevoir" => ["çus", "çus", "çut", "çûmes", "çûtes", "çurent"],
        "clore" => [_, _, _, _, _, _],
        "clure" => ["clus", "clus", "clut", "clûmes", "clûtes", "clurent"],
        "coudre" => ["cousis", "cousis", "cousit", "cousîmes", "cousîtes", "cousirent"],
        "courir" => ["courus", "courus", "courut", "courûmes", "courûtes", "coururent"],
        "croire" => ["crus", "crus", "crut", "crûmes", "crûtes", "crurent"],
        "croître" => ["crûs", "crûs", "crût", "crûmes", "crûtes", "crûrent"],
        "devoir" => ["dus", "dus", "dut", "dûmes", "dûtes", "durent"],
        "dire" => ["dis", "dis", "dit", "dîmes", "dîtes", "dirent"],
        "écrire" => ["écrivis", "écrivis", "écrivit", "écrivîmes", "écrivîtes", "écrivirent"],
        "eindre" => ["eignis", "eignis", "eignit", "eignîmes", "eignîtes", "eignirent"],
        "endre" => ["endis", "endis", "endit", "endîmes", "endîtes", "endirent"],
        "erdre" => ["erdis", "erdis", "erdit", "erdîmes", "erdîtes", "erdirent"],
        "être" => ["fus", "fus", "fut", "fûmes", "fûtes", "furent"],
        "faire" => ["fis", "fis", "fit", "fîmes", "fîtes", "firent"],
        "falloir" => [_, _, "fallut", _, _, _],
        "frire" => [_, _, _, _, _, _],
        "gésir" => [_, _, _, _, _, _],
        "lire" => ["lus", "lus", "lut", "lûmes", "lûtes", "lurent"],
        "mettre" => ["mis", "mis", "mit", "mîmes", "mîtes", "mirent"],
        "moudre" => ["moulus", "moulus", "moulut", "moulûmes", "moulûtes", "moulurent"],
        "mourir" => ["mourus", "mourus", "mourut", "mourûmes", "mourûtes", "moururent"],
        "mouvoir" => ["mus", "mus", "mut", "mûmes", "mûtes", "murent"],
        "naître" => ["naquis", "naquis", "naquit", "naquîmes", "naquîtes", "naquirent"],
        "oindre" => ["oignis", "oignis", "oignit", "oignîmes", "oignîtes", "oignirent"],
        "ompre" => ["ompis", "ompis", "ompit", "ompîmes", "ompîtes", "ompirent"],
        "ondre" => ["ondis", "ondis", "ondit", "ondîmes", "ondîtes", "ondirent"],
        "ordre" => ["ordis", "ordis", "ordit", "ordîmes", "ordîtes", "ordirent"],
        "paître" => [_, _, _, _, _, _],
        "plaire" => ["plus", "plus", "plut", "plûmes", "plûtes", "plurent"],
        "pleuvoir" => [_, _, "plut", _, _, "plurent"],
        "pouvoir" => ["pus", "pus", "put", "pûmes", "pûtes", "purent"],
        "prendre" => ["pris", "pris", "prit", "prîmes", "prîtes", "prirent"],
        "quérir" => ["quis", "quis", "quit", "quîmes", "quîtes", "quirent"],
        "rire" => ["ris", "ris", "rit", "rîmes", "rîtes", "rirent"],
        "savoir" => ["sus", "sus", "sut", "sûmes", "sûtes", "surent"],
        "scrire" => ["scrivis", "scrivis", "scrivit", "scrivîmes", "scrivîtes", "scrivirent"],
        "seoir" => [_, _, _, _, _, _],
        "suivre" => ["suivis", "suivis", "suivit", "suivîmes", "suivîtes", "suivirent"],
        "taire" => ["tus", "tus", "tut", "tûmes", "tûtes", "turent"],
        "tenir" => ["tins", "tins", "tint", "tînmes", "tîntes", "tinrent"],
        "ttre" => ["ttis", "ttis", "ttit", "ttîmes", "ttîtes", "ttirent"],
        "uire" => ["uisis", "uisis", "uisit", "uisîmes", "uisîtes", "uisirent"],
        "vaincre" => ["vainquis", "vainquis", "vainquit", "vainquîmes", "vainquîtes", "vainquirent"],
        "valoir" => ["valus", "valus", "valut", "valûmes", "valûtes", "valurent"],
        "venir" => ["vins", "vins", "vint", "vînmes", "vîntes", "vinrent"],
        "vivre" => ["vécus", "vécus", "vécut", "vécûmes", "vécûtes", "vécurent"],
        "voir" => ["vis", "vis", "vit", "vîmes", "vîtes", "virent"],
        "vouloir" => ["voulus", "voulus", "voulut", "voulûmes", "voulûtes", "voulurent"],
    }
}
