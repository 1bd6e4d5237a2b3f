//! Fixed demonstration data: six clubs with four players each.

pub struct SampleTeam {
    pub team_name: &'static str,
    pub coach_name: &'static str,
    pub founded_year: i64,
    pub city: &'static str,
    pub stadium: &'static str,
    pub players: [SamplePlayer; 4],
}

pub struct SamplePlayer {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub position: &'static str,
    pub jersey_number: i64,
    pub age: i64,
    pub height: f64,
    pub weight: f64,
    pub ranking: i64,
    pub goals: i64,
    pub assists: i64,
    pub matches_played: i64,
}

#[allow(clippy::too_many_arguments)]
fn p(
    first_name: &'static str,
    last_name: &'static str,
    position: &'static str,
    jersey_number: i64,
    age: i64,
    height: f64,
    weight: f64,
    ranking: i64,
    goals: i64,
    assists: i64,
    matches_played: i64,
) -> SamplePlayer {
    SamplePlayer {
        first_name,
        last_name,
        position,
        jersey_number,
        age,
        height,
        weight,
        ranking,
        goals,
        assists,
        matches_played,
    }
}

/// The six sample clubs in insertion order.
pub fn sample_teams() -> [SampleTeam; 6] {
    [
        SampleTeam {
            team_name: "Manchester United",
            coach_name: "Erik ten Hag",
            founded_year: 1878,
            city: "Manchester",
            stadium: "Old Trafford",
            players: [
                p("Marcus", "Rashford", "Forward", 10, 26, 180.0, 70.0, 92, 28, 12, 38),
                p("Bruno", "Fernandes", "Midfielder", 8, 29, 179.0, 69.0, 90, 18, 20, 40),
                p("Casemiro", "Silva", "Midfielder", 18, 31, 185.0, 84.0, 88, 5, 8, 35),
                p("Harry", "Maguire", "Defender", 5, 30, 194.0, 100.0, 82, 3, 2, 32),
            ],
        },
        SampleTeam {
            team_name: "Barcelona FC",
            coach_name: "Xavi Hernandez",
            founded_year: 1899,
            city: "Barcelona",
            stadium: "Camp Nou",
            players: [
                p("Robert", "Lewandowski", "Forward", 9, 35, 185.0, 81.0, 95, 35, 10, 40),
                p("Pedri", "Gonzalez", "Midfielder", 8, 21, 174.0, 60.0, 91, 8, 15, 38),
                p("Gavi", "Paez", "Midfielder", 6, 19, 173.0, 69.0, 89, 6, 12, 36),
                p("Ronald", "Araujo", "Defender", 4, 24, 188.0, 83.0, 87, 4, 3, 35),
            ],
        },
        SampleTeam {
            team_name: "Real Madrid",
            coach_name: "Carlo Ancelotti",
            founded_year: 1902,
            city: "Madrid",
            stadium: "Santiago Bernabeu",
            players: [
                p("Vinicius", "Junior", "Forward", 7, 23, 176.0, 73.0, 94, 30, 18, 42),
                p("Jude", "Bellingham", "Midfielder", 5, 20, 186.0, 75.0, 93, 22, 14, 40),
                p("Luka", "Modric", "Midfielder", 10, 38, 172.0, 66.0, 91, 8, 16, 38),
                p("Antonio", "Rudiger", "Defender", 22, 30, 190.0, 85.0, 86, 2, 1, 39),
            ],
        },
        SampleTeam {
            team_name: "Bayern Munich",
            coach_name: "Thomas Tuchel",
            founded_year: 1900,
            city: "Munich",
            stadium: "Allianz Arena",
            players: [
                p("Harry", "Kane", "Forward", 9, 30, 188.0, 86.0, 96, 42, 15, 41),
                p("Jamal", "Musiala", "Midfielder", 42, 21, 183.0, 70.0, 92, 16, 12, 38),
                p("Joshua", "Kimmich", "Midfielder", 6, 28, 177.0, 75.0, 90, 6, 18, 40),
                p("Matthijs", "de Ligt", "Defender", 4, 24, 189.0, 89.0, 88, 3, 2, 37),
            ],
        },
        SampleTeam {
            team_name: "Liverpool FC",
            coach_name: "Jurgen Klopp",
            founded_year: 1892,
            city: "Liverpool",
            stadium: "Anfield",
            players: [
                p("Mohamed", "Salah", "Forward", 11, 31, 175.0, 71.0, 94, 32, 16, 40),
                p("Luis", "Diaz", "Forward", 7, 26, 178.0, 67.0, 89, 18, 11, 38),
                p("Dominik", "Szoboszlai", "Midfielder", 8, 23, 187.0, 74.0, 87, 9, 13, 36),
                p("Virgil", "van Dijk", "Defender", 4, 32, 195.0, 92.0, 91, 5, 3, 39),
            ],
        },
        SampleTeam {
            team_name: "Paris Saint-Germain",
            coach_name: "Luis Enrique",
            founded_year: 1970,
            city: "Paris",
            stadium: "Parc des Princes",
            players: [
                p("Kylian", "Mbappe", "Forward", 7, 25, 178.0, 73.0, 98, 45, 20, 42),
                p("Ousmane", "Dembele", "Forward", 10, 26, 178.0, 67.0, 90, 20, 15, 38),
                p("Vitinha", "Silva", "Midfielder", 17, 23, 172.0, 64.0, 88, 7, 14, 40),
                p("Marquinhos", "Correa", "Defender", 5, 29, 183.0, 75.0, 89, 4, 2, 41),
            ],
        },
    ]
}

/// Total players across all sample clubs.
pub fn player_count() -> usize {
    sample_teams().iter().map(|t| t.players.len()).sum()
}
