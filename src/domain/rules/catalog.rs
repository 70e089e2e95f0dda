//! Race, class and gender catalogs offered by the wizard

/// A playable race and its optional lineage variants
#[derive(Debug, Clone, Copy)]
pub struct RaceDef {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

pub const RACES: [RaceDef; 7] = [
    RaceDef {
        name: "Humano",
        variants: &[],
    },
    RaceDef {
        name: "Elfo",
        variants: &["Alto Elfo", "Elfo da Floresta", "Elfo Negro (Drow)"],
    },
    RaceDef {
        name: "Anão",
        variants: &["Anão da Colina", "Anão da Montanha"],
    },
    RaceDef {
        name: "Halfling",
        variants: &["Pés-Leves", "Robusto"],
    },
    RaceDef {
        name: "MeioElfo",
        variants: &[],
    },
    RaceDef {
        name: "Tiefling",
        variants: &[
            "Asmodeus",
            "Baalzebul",
            "Dispater",
            "Fierna",
            "Glasya",
            "Levistus",
            "Mammon",
            "Mephistopheles",
            "Zariel",
        ],
    },
    RaceDef {
        name: "Draconato",
        variants: &[
            "Fogo – Vermelho",
            "Relâmpago – Azul",
            "Veneno – Verde",
            "Ácido – Preto",
            "Gelo – Branco",
            "Fogo – Dourado",
            "Gelo – Prateado",
            "Relâmpago – Bronze",
            "Ácido – Cobre",
            "Fogo – Latão",
        ],
    },
];

/// A class and its archetype paths
#[derive(Debug, Clone, Copy)]
pub struct ClassDef {
    pub name: &'static str,
    pub archetypes: &'static [&'static str],
}

pub const CLASSES: [ClassDef; 12] = [
    ClassDef {
        name: "Guerreiro",
        archetypes: &["Campeão", "Mestre de Batalha", "Cavaleiro Arcano"],
    },
    ClassDef {
        name: "Mago",
        archetypes: &["Evocação", "Abjuração", "Ilusão", "Necromancia"],
    },
    ClassDef {
        name: "Ladino",
        archetypes: &["Ladrão", "Assassino", "Trapaceiro Arcano"],
    },
    ClassDef {
        name: "Clérigo",
        archetypes: &["Vida", "Guerra", "Luz", "Conhecimento"],
    },
    ClassDef {
        name: "Paladino",
        archetypes: &["Devoção", "Vingança", "Anciões"],
    },
    ClassDef {
        name: "Bárbaro",
        archetypes: &["Berserker", "Totem Espiritual"],
    },
    ClassDef {
        name: "Bardo",
        archetypes: &["Conhecimento", "Bravura"],
    },
    ClassDef {
        name: "Ranger",
        archetypes: &["Caçador", "Mestre das Feras"],
    },
    ClassDef {
        name: "Druida",
        archetypes: &["Círculo da Terra", "Círculo da Lua"],
    },
    ClassDef {
        name: "Monge",
        archetypes: &[
            "Caminho da Mão Aberta",
            "Caminho da Sombra",
            "Caminho dos Quatro Elementos",
        ],
    },
    ClassDef {
        name: "Feiticeiro",
        archetypes: &["Linhagem Dracônica", "Magia Selvagem"],
    },
    ClassDef {
        name: "Bruxo",
        archetypes: &["Arquifada", "Demônio", "Grande Antigo"],
    },
];

pub const GENDERS: [&str; 4] = ["Masculino", "Feminino", "Não-binário", "Outro"];

pub fn race(name: &str) -> Option<&'static RaceDef> {
    RACES.iter().find(|r| r.name == name)
}

pub fn class(name: &str) -> Option<&'static ClassDef> {
    CLASSES.iter().find(|c| c.name == name)
}
