use crate::core::error::RaceError;
use crate::interfaces::display_interface::RgbColor;
use serde::Deserialize;

/// * `name` - Team name, e.g. Scuderia Rosso
/// * `color` - Livery colour as CSS colour string, e.g. #dc0000
/// * `base_pace` - Pace multiplier of the team's car, 1.0 is the reference car
#[derive(Debug, Deserialize, Clone)]
pub struct TeamPars {
    pub name: String,
    pub color: String,
    pub base_pace: f64,
}

#[derive(Debug)]
pub struct Team {
    pub name: String,
    pub color: RgbColor,
    pub base_pace: f64,
}

impl Team {
    pub fn new(team_pars: &TeamPars) -> Result<Team, RaceError> {
        if !(team_pars.base_pace >= 0.0 && team_pars.base_pace.is_finite()) {
            return Err(RaceError::InvalidTeamPace {
                team: team_pars.name.to_owned(),
                base_pace: team_pars.base_pace,
            });
        }

        let color = team_pars
            .color
            .parse::<css_color_parser::Color>()
            .map_err(|_| RaceError::InvalidColor(team_pars.color.to_owned()))?;

        Ok(Team {
            name: team_pars.name.to_owned(),
            color: RgbColor {
                r: color.r,
                g: color.g,
                b: color.b,
            },
            base_pace: team_pars.base_pace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_pars(color: &str) -> TeamPars {
        TeamPars {
            name: String::from("Scuderia Rosso"),
            color: color.to_owned(),
            base_pace: 1.0,
        }
    }

    #[test]
    fn parses_hex_livery() {
        let team = Team::new(&team_pars("#dc0000")).unwrap();
        assert_eq!((team.color.r, team.color.g, team.color.b), (220, 0, 0));
    }

    #[test]
    fn rejects_invalid_livery() {
        assert_eq!(
            Team::new(&team_pars("not-a-colour")).unwrap_err(),
            RaceError::InvalidColor(String::from("not-a-colour"))
        );
    }

    #[test]
    fn rejects_negative_or_nan_pace() {
        let mut team_pars = team_pars("#dc0000");
        team_pars.base_pace = -1.0;
        assert!(matches!(
            Team::new(&team_pars),
            Err(RaceError::InvalidTeamPace { .. })
        ));

        team_pars.base_pace = f64::NAN;
        assert!(Team::new(&team_pars).is_err());
    }
}
