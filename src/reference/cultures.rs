use serde::{Deserialize, Serialize};

/// Naming culture; selects the tables used for people, clubs and grounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Culture {
    English,
    Spanish,
    Italian,
    German,
    French,
    Portuguese,
    Dutch,
    Japanese,
}

string_enum!(Culture {
    English => "english",
    Spanish => "spanish",
    Italian => "italian",
    German => "german",
    French => "french",
    Portuguese => "portuguese",
    Dutch => "dutch",
    Japanese => "japanese",
});

/// Static name material for one culture.
///
/// Patterns use `{city}` and `{surname}` placeholders.
pub struct NameTable {
    pub first_names: &'static [&'static str],
    pub surnames: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub team_patterns: &'static [&'static str],
    pub short_name_patterns: &'static [&'static str],
    pub stadium_patterns: &'static [&'static str],
}

impl Culture {
    pub fn names(self) -> &'static NameTable {
        match self {
            Culture::English => &ENGLISH,
            Culture::Spanish => &SPANISH,
            Culture::Italian => &ITALIAN,
            Culture::German => &GERMAN,
            Culture::French => &FRENCH,
            Culture::Portuguese => &PORTUGUESE,
            Culture::Dutch => &DUTCH,
            Culture::Japanese => &JAPANESE,
        }
    }
}

// --- English: town + "United"/"Rovers" ---

const ENGLISH: NameTable = NameTable {
    first_names: &[
        "Harry", "Jack", "Oliver", "George", "Charlie", "Thomas", "James", "William", "Daniel",
        "Samuel", "Joseph", "Lewis", "Ryan", "Callum", "Kieran", "Marcus", "Declan", "Mason",
        "Jordan", "Reece", "Ben", "Luke", "Aaron", "Connor",
    ],
    surnames: &[
        "Smith", "Jones", "Taylor", "Brown", "Walker", "Wright", "Robinson", "Thompson", "White",
        "Hughes", "Edwards", "Green", "Hall", "Wood", "Harris", "Clarke", "Jackson", "Turner",
        "Hill", "Cooper", "Ward", "Morris", "Barker", "Fletcher",
    ],
    cities: &[
        "Ashbourne", "Bramford", "Castleton", "Dunmore", "Eastleigh", "Fairhaven", "Greyford",
        "Hollowmere", "Ironbridge", "Kingsbury", "Longridge", "Marlow", "Northam", "Oakham",
        "Redcliffe", "Stonebridge", "Thornbury", "Westbrook",
    ],
    team_patterns: &[
        "{city} United", "{city} Rovers", "{city} Town", "{city} City", "{city} Athletic",
        "{city} Wanderers", "{city} Albion", "FC {city}",
    ],
    short_name_patterns: &["{city3}", "{city3} U", "{city3} FC"],
    stadium_patterns: &[
        "{city} Park", "{surname} Road", "The {city} Ground", "{city} Lane", "{surname} Park",
        "{city} Community Stadium",
    ],
};

// --- Spanish: "Real"/"Atlético" prefixes ---

const SPANISH: NameTable = NameTable {
    first_names: &[
        "Alejandro", "Pablo", "Sergio", "Álvaro", "Javier", "Iker", "Marcos", "Diego", "Raúl",
        "Adrián", "Carlos", "Mario", "Rubén", "Hugo", "Jorge", "Andrés", "Íñigo", "Dani",
    ],
    surnames: &[
        "García", "Fernández", "González", "Rodríguez", "López", "Martínez", "Sánchez", "Pérez",
        "Gómez", "Ruiz", "Moreno", "Navarro", "Torres", "Ramos", "Iglesias", "Castillo",
        "Ortega", "Delgado",
    ],
    cities: &[
        "Alcantara", "Bellavista", "Castellón del Río", "Dosaguas", "Fuentealta", "Granadilla",
        "Lomas Verdes", "Montenegro", "Peñaranda", "Riofrío", "San Lorenzo", "Valdeluz",
        "Villaverde", "Torrealba",
    ],
    team_patterns: &[
        "Real {city}", "Atlético {city}", "CD {city}", "{city} CF", "Deportivo {city}",
        "UD {city}", "Racing {city}", "SD {city}",
    ],
    short_name_patterns: &["{city3}", "R{city3}", "{city3} CF"],
    stadium_patterns: &[
        "Estadio {city}", "Estadio {surname}", "Campo de {city}", "Nuevo Estadio {city}",
        "Estadio Municipal de {city}",
    ],
};

// --- Italian: "AC"/"Sporting" with -ese towns ---

const ITALIAN: NameTable = NameTable {
    first_names: &[
        "Lorenzo", "Alessandro", "Matteo", "Federico", "Andrea", "Gianluca", "Marco", "Riccardo",
        "Davide", "Simone", "Francesco", "Nicolò", "Giacomo", "Stefano", "Luca", "Tommaso",
    ],
    surnames: &[
        "Rossi", "Russo", "Ferrari", "Esposito", "Bianchi", "Romano", "Colombo", "Ricci",
        "Marino", "Greco", "Bruno", "Gallo", "Conti", "De Luca", "Mancini", "Costa", "Lombardi",
        "Barbieri",
    ],
    cities: &[
        "Acquaviva", "Borgoverde", "Castelfranco", "Dorsale", "Fiumara", "Montefalco",
        "Portovecchio", "Roccabianca", "San Vitale", "Torrenova", "Valdoro", "Villafranca",
    ],
    team_patterns: &[
        "AC {city}", "US {city}", "{city} Calcio", "Sporting {city}", "AS {city}",
        "Virtus {city}", "Pro {city}",
    ],
    short_name_patterns: &["{city3}", "AC{city3}", "{city3} C"],
    stadium_patterns: &[
        "Stadio {city}", "Stadio {surname}", "Stadio Comunale di {city}", "Arena {city}",
    ],
};

// --- German: "SV"/"FC" + numeric founding styles ---

const GERMAN: NameTable = NameTable {
    first_names: &[
        "Lukas", "Leon", "Jonas", "Felix", "Maximilian", "Niklas", "Tim", "Jan", "Florian",
        "Tobias", "Moritz", "Kai", "Julian", "Marco", "Sebastian", "Timo",
    ],
    surnames: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Koch", "Richter", "Klein", "Wolf", "Neumann", "Krüger",
        "Zimmermann", "Braun",
    ],
    cities: &[
        "Altenburg", "Bergheim", "Dornfeld", "Eichstadt", "Falkenau", "Grünwald", "Hohenstein",
        "Kirchberg", "Lindenau", "Rosenheide", "Steinbach", "Waldkirch",
    ],
    team_patterns: &[
        "FC {city}", "SV {city}", "VfB {city}", "{city} SC", "TSV {city}", "Eintracht {city}",
        "Borussia {city}", "SpVgg {city}",
    ],
    short_name_patterns: &["{city3}", "FC{city3}", "SV{city3}"],
    stadium_patterns: &[
        "{city} Arena", "{city}er Stadion", "Waldstadion {city}", "{surname}-Park",
        "Sportpark {city}",
    ],
};

// --- French: "Olympique"/"Stade" ---

const FRENCH: NameTable = NameTable {
    first_names: &[
        "Lucas", "Hugo", "Théo", "Antoine", "Kylian", "Mathis", "Raphaël", "Louis", "Adrien",
        "Benjamin", "Clément", "Julien", "Nicolas", "Maxime", "Yanis", "Enzo",
    ],
    surnames: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
        "Leroy", "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garnier", "Fournier",
        "Girard", "Bonnet",
    ],
    cities: &[
        "Beaumont", "Châteaurive", "Clairval", "Fontenelle", "Lormont-sur-Mer", "Montclair",
        "Pontvallon", "Rochefort", "Saint-Aubin", "Valbonne", "Villeneuve",
    ],
    team_patterns: &[
        "Olympique {city}", "Stade {city}", "AS {city}", "FC {city}", "Racing Club de {city}",
        "US {city}", "{city} FC",
    ],
    short_name_patterns: &["{city3}", "O{city3}", "S{city3}"],
    stadium_patterns: &[
        "Stade de {city}", "Stade {surname}", "Parc de {city}", "Stade Municipal de {city}",
    ],
};

// --- Portuguese: "Sporting"/"Clube" ---

const PORTUGUESE: NameTable = NameTable {
    first_names: &[
        "João", "Tiago", "Rafael", "Diogo", "Gonçalo", "Bruno", "Rúben", "Pedro", "André",
        "Ricardo", "Nuno", "Bernardo", "Vitinha", "Lucas", "Gabriel", "Thiago",
    ],
    surnames: &[
        "Silva", "Santos", "Ferreira", "Pereira", "Oliveira", "Costa", "Rodrigues", "Martins",
        "Sousa", "Fernandes", "Gonçalves", "Gomes", "Lopes", "Marques", "Alves", "Ribeiro",
        "Pinto", "Carvalho",
    ],
    cities: &[
        "Alvorada", "Belo Campo", "Costa Verde", "Fonte Nova", "Monte Alto", "Porto Novo",
        "Rio Claro", "Santa Luzia", "São Vicente", "Vila Real do Sul",
    ],
    team_patterns: &[
        "Sporting {city}", "{city} FC", "SC {city}", "Clube {city}", "Académica de {city}",
        "União {city}", "Atlético {city}",
    ],
    short_name_patterns: &["{city3}", "S{city3}", "{city3} SC"],
    stadium_patterns: &[
        "Estádio de {city}", "Estádio {surname}", "Estádio Municipal de {city}",
        "Arena {city}",
    ],
};

// --- Dutch: "VV"/"SC" ---

const DUTCH: NameTable = NameTable {
    first_names: &[
        "Daan", "Sem", "Lucas", "Milan", "Levi", "Thijs", "Jesse", "Bram", "Ruben", "Stijn",
        "Joost", "Wout", "Frenkie", "Jurriën", "Teun", "Sven",
    ],
    surnames: &[
        "de Jong", "Jansen", "de Vries", "van den Berg", "van Dijk", "Bakker", "Visser",
        "Smit", "Meijer", "de Boer", "Mulder", "de Groot", "Bos", "Vos", "Peters", "Hendriks",
    ],
    cities: &[
        "Aldenburg", "Brekel", "Dijkhoven", "Hoogveen", "Lindewijk", "Oosterzand",
        "Rijnstad", "Veldhaven", "Westerbroek", "Zandvoort-Oost",
    ],
    team_patterns: &[
        "VV {city}", "SC {city}", "FC {city}", "{city} Boys", "Go Ahead {city}",
        "Sparta {city}", "Excelsior {city}",
    ],
    short_name_patterns: &["{city3}", "VV{city3}", "SC{city3}"],
    stadium_patterns: &["{city} Stadion", "Sportpark {city}", "De {surname} Arena"],
};

// --- Japanese: city + nickname ---

const JAPANESE: NameTable = NameTable {
    first_names: &[
        "Haruto", "Yuto", "Sota", "Ren", "Kaito", "Takumi", "Daichi", "Kenta", "Shota", "Ryo",
        "Hiroki", "Takefusa", "Kaoru", "Wataru", "Ritsu", "Junya",
    ],
    surnames: &[
        "Sato", "Suzuki", "Takahashi", "Tanaka", "Watanabe", "Ito", "Yamamoto", "Nakamura",
        "Kobayashi", "Kato", "Yoshida", "Yamada", "Sasaki", "Matsumoto", "Inoue", "Kimura",
    ],
    cities: &[
        "Aozora", "Hanamura", "Kawashima", "Minatoyama", "Nishikaze", "Shirahama", "Takamatsu",
        "Yamabuki", "Kitahara", "Fujimino",
    ],
    team_patterns: &[
        "{city} FC", "{city} Rising", "{city} Marines", "{city} Thunder", "Sanga {city}",
        "{city} Blaze", "{city} United",
    ],
    short_name_patterns: &["{city3}", "{city3} FC"],
    stadium_patterns: &["{city} Stadium", "{city} Athletic Park", "{city} Sports Dome"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_culture_has_populated_tables() {
        for culture in Culture::ALL {
            let t = culture.names();
            assert!(t.first_names.len() >= 10, "{culture}");
            assert!(t.surnames.len() >= 10, "{culture}");
            assert!(!t.cities.is_empty(), "{culture}");
            assert!(!t.team_patterns.is_empty(), "{culture}");
            assert!(!t.short_name_patterns.is_empty(), "{culture}");
            assert!(!t.stadium_patterns.is_empty(), "{culture}");
        }
    }

    #[test]
    fn team_patterns_reference_city() {
        for culture in Culture::ALL {
            for p in culture.names().team_patterns {
                assert!(p.contains("{city}"), "{culture}: {p}");
            }
        }
    }

    #[test]
    fn culture_string_round_trip() {
        assert_eq!(Culture::try_from("dutch".to_string()), Ok(Culture::Dutch));
        assert_eq!(String::from(Culture::Japanese), "japanese");
        assert!(Culture::try_from("klingon".to_string()).is_err());
    }
}
