use anyhow::Context;
use std::str::FromStr;

/// Commands a player can issue to their car between ticks.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    SetPushLevel(i64),
    RequestPit,
    ChooseTyre(String),
}

impl FromStr for PlayerCommand {
    type Err = anyhow::Error;

    /// Parses terminal input: `push <1-5>`, `pit` or `tyre <soft|medium|hard>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let cmd = parts
            .next()
            .context("Empty command!")?
            .to_lowercase();

        match cmd.as_str() {
            "push" | "p" => {
                let level = parts
                    .next()
                    .context("Push level missing, use e.g. 'push 4'!")?
                    .parse::<i64>()
                    .context("Push level must be an integer!")?;
                Ok(PlayerCommand::SetPushLevel(level))
            }
            "pit" | "box" => Ok(PlayerCommand::RequestPit),
            "tyre" | "tire" | "t" => {
                let compound = parts
                    .next()
                    .context("Compound missing, use e.g. 'tyre hard'!")?;
                Ok(PlayerCommand::ChooseTyre(compound.to_owned()))
            }
            other => anyhow::bail!("Unknown command '{}'!", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_commands() {
        assert_eq!(
            "push 4".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::SetPushLevel(4)
        );
        assert_eq!("PIT".parse::<PlayerCommand>().unwrap(), PlayerCommand::RequestPit);
        assert_eq!(
            "tyre hard".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::ChooseTyre(String::from("hard"))
        );
    }

    #[test]
    fn keeps_out_of_range_push_for_the_engine_to_clamp() {
        assert_eq!(
            "push 9".parse::<PlayerCommand>().unwrap(),
            PlayerCommand::SetPushLevel(9)
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<PlayerCommand>().is_err());
        assert!("push fast".parse::<PlayerCommand>().is_err());
        assert!("tyre".parse::<PlayerCommand>().is_err());
        assert!("overtake".parse::<PlayerCommand>().is_err());
    }
}
