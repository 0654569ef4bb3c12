//! Future of the indicative.

use crate::table::Table;

use super::generate::{self, EVERY};
use super::present::MUTE_E;

/// Build the complete future table.
pub(super) fn table() -> Table {
    let mut table = group1();
    table.merge(generate::mute_e_alternation(
        MUTE_E,
        ["erai", "eras", "era", "erons", "erez", "eront"],
        EVERY,
    ));
    table.merge(group2());
    table.merge(group3());
    table
}

/// Verbs in `-er`.
#[rustfmt::skip]
pub(super) fn group1() -> Table {
    table! {
        "appeler" => ["appellerai", "appelleras", "appellera", "appellerons", "appellerez", "appelleront"],
        "ecer" => ["ècerai", "èceras", "ècera", "ècerons", "ècerez", "èceront"],
        "eler" => ["ellerai", "elleras", "ellera", "ellerons", "ellerez", "elleront"],
        "emer" => ["èmerai", "èmeras", "èmera", "èmerons", "èmerez", "èmeront"],
        "ener" => ["ènerai", "èneras", "ènera", "ènerons", "ènerez", "èneront"],
        "eper" => ["èperai", "èperas", "èpera", "èperons", "èperez", "èperont"],
        "erer" => ["èrerai", "èreras", "èrera", "èrerons", "èrerez", "èreront"],
        "eser" => ["èserai", "èseras", "èsera", "èserons", "èserez", "èseront"],
        "eter" => ["etterai", "etteras", "ettera", "etterons", "etterez", "etteront"],
        "ever" => ["èverai", "èveras", "èvera", "èverons", "èverez", "èveront"],
        "evrer" => ["èvrerai", "èvreras", "èvrera", "èvrerons", "èvrerez", "èvreront"],
        "yer" => ["ierai", "ieras", "iera", "ierons", "ierez", "ieront"],
        "er" => ["erai", "eras", "era", "erons", "erez", "eront"],
    }
}

/// Verbs in `-ir` with an `-issons` plural.
#[rustfmt::skip]
pub(super) fn group2() -> Table {
    table! {
        "ir" => ["irai", "iras", "ira", "irons", "irez", "iront"],
        "ïr" => ["ïrai", "ïras", "ïra", "ïrons", "ïrez", "ïront"],
    }
}

/// Irregular verbs. Verbs in `-re` drop their final `e`, anything else takes
/// the endings directly on the infinitive.
#[rustfmt::skip]
pub(super) fn group3() -> Table {
    table! {
        "" => ["ai", "as", "a", "ons", "ez", "ont"],
        "e" => ["ai", "as", "a", "ons", "ez", "ont"],
        "aller" => ["irai", "iras", "ira", "irons", "irez", "iront"],
        "asseoir" => ["assoirai", "assoiras", "assoira", "assoirons", "assoirez", "assoiront"],
        "avoir" => ["aurai", "auras", "aura", "aurons", "aurez", "auront"],
        "cevoir" => ["cevrai", "cevras", "cevra", "cevrons", "cevrez", "cevront"],
        "courir" => ["courrai", "courras", "courra", "courrons", "courrez", "courront"],
        "cueillir" => ["cueillerai", "cueilleras", "cueillera", "cueillerons", "cueillerez", "cueilleront"],
        "devoir" => ["devrai", "devras", "devra", "devrons", "devrez", "devront"],
        "envoyer" => ["enverrai", "enverras", "enverra", "enverrons", "enverrez", "enverront"],
        "être" => ["serai", "seras", "sera", "serons", "serez", "seront"],
        "faire" => ["ferai", "feras", "fera", "ferons", "ferez", "feront"],
        "falloir" => [_, _, "faudra", _, _, _],
        "gésir" => [_, _, _, _, _, _],
        "mourir" => ["mourrai", "mourras", "mourra", "mourrons", "mourrez", "mourront"],
        "mouvoir" => ["mouvrai", "mouvras", "mouvra", "mouvrons", "mouvrez", "mouvront"],
        "pleuvoir" => [_, _, "pleuvra", _, _, "pleuvront"],
        "poindre" => [_, _, "poindra", _, _, "poindront"],
        "pouvoir" => ["pourrai", "pourras", "pourra", "pourrons", "pourrez", "pourront"],
        "prévoir" => ["prévoirai", "prévoiras", "prévoira", "prévoirons", "prévoirez", "prévoiront"],
        "quérir" => ["querrai", "querras", "querra", "querrons", "querrez", "querront"],
        "savoir" => ["saurai", "sauras", "saura", "saurons", "saurez", "sauront"],
        "seoir" => [_, _, "siéra", _, _, "siéront"],
        "tenir" => ["tiendrai", "tiendras", "tiendra", "tiendrons", "tiendrez", "tiendront"],
        "vaincre" => ["vaincrai", "vaincras", "vaincra", "vaincrons", "vaincrez", "vaincront"],
        "valoir" => ["vaudrai", "vaudras", "vaudra", "vaudrons", "vaudrez", "vaudront"],
        "venir" => ["viendrai", "viendras", "viendra", "viendrons", "viendrez", "viendront"],
        "voir" => ["verrai", "verras", "verra", "verrons", "verrez", "verront"],
        "vouloir" => ["voudrai", "voudras", "voudra", "voudrons", "voudrez", "voudront"],
    }
}
