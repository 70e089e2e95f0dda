//! Background catalog: canonical label, granted skills and seed text

/// A selectable narrative background
#[derive(Debug, Clone, Copy)]
pub struct BackgroundDef {
    pub key: &'static str,
    pub label: &'static str,
    pub granted_skills: &'static [&'static str],
    pub description: &'static str,
}

pub const BACKGROUNDS: [BackgroundDef; 12] = [
    BackgroundDef {
        key: "Acolito",
        label: "Acólito",
        granted_skills: &["Insight", "Religion"],
        description: "Criado em templos e locais sagrados, você serviu uma divindade e aprendeu rituais, tradições religiosas e doutrinas antigas.",
    },
    BackgroundDef {
        key: "Charlatao",
        label: "Charlatão",
        granted_skills: &["Deception", "Sleight of Hand"],
        description: "Você viveu enganando os outros, usando truques, identidades falsas e lábia para sobreviver.",
    },
    BackgroundDef {
        key: "Criminoso",
        label: "Criminoso",
        granted_skills: &["Deception", "Stealth"],
        description: "Você atuou à margem da lei, envolvido em roubos, contrabando ou atividades ilegais.",
    },
    BackgroundDef {
        key: "Artista",
        label: "Artista",
        granted_skills: &["Acrobatics", "Performance"],
        description: "Você se apresentou para multidões, vivendo de música, dança, atuação ou espetáculos.",
    },
    BackgroundDef {
        key: "HeroiPopular",
        label: "Herói Popular",
        granted_skills: &["Animal Handling", "Survival"],
        description: "Você veio do povo simples e tornou-se um símbolo de esperança para comunidades humildes.",
    },
    BackgroundDef {
        key: "Artesao",
        label: "Artesão de Guilda",
        granted_skills: &["Insight", "Persuasion"],
        description: "Membro de uma guilda, você aprendeu um ofício e a negociar dentro de organizações formais.",
    },
    BackgroundDef {
        key: "Eremita",
        label: "Eremita",
        granted_skills: &["Medicine", "Religion"],
        description: "Você viveu isolado, afastado da sociedade, refletindo sobre os mistérios do mundo.",
    },
    BackgroundDef {
        key: "Nobre",
        label: "Nobre",
        granted_skills: &["History", "Persuasion"],
        description: "Criado entre a elite, você entende política, etiqueta e jogos de poder.",
    },
    BackgroundDef {
        key: "Forasteiro",
        label: "Forasteiro",
        granted_skills: &["Athletics", "Survival"],
        description: "Você cresceu em regiões selvagens, aprendendo a sobreviver longe da civilização.",
    },
    BackgroundDef {
        key: "Sabio",
        label: "Sábio",
        granted_skills: &["Arcana", "History"],
        description: "Você dedicou sua vida ao estudo, pesquisa e busca por conhecimento.",
    },
    BackgroundDef {
        key: "Marinheiro",
        label: "Marinheiro",
        granted_skills: &["Athletics", "Perception"],
        description: "Você viveu nos mares, enfrentando tempestades e perigos em longas viagens.",
    },
    BackgroundDef {
        key: "Soldado",
        label: "Soldado",
        granted_skills: &["Athletics", "Intimidation"],
        description: "Você serviu em exércitos ou milícias, treinado para combate e disciplina.",
    },
];

pub fn background(key: &str) -> Option<&'static BackgroundDef> {
    BACKGROUNDS.iter().find(|b| b.key == key)
}
