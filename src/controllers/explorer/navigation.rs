use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A discrete change to the view, as produced by an input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Move the centre by a pixel delta.
    Pan { dx: i64, dy: i64 },
    /// Move the centre onto a clicked pixel. Ignored outside the viewport.
    Click { x: i64, y: i64 },
    ZoomIn,
    ZoomOut,
    Resize { width: u32, height: u32 },
    SetMaxIterations(u32),
    /// Return to the view the session started with, keeping the current size.
    ResetView,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationParseError {
    #[error("unknown navigation command {0:?}")]
    UnknownCommand(String),
    #[error("{command} expects {expected}, got {value:?}")]
    InvalidArgument {
        command: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl FromStr for NavigationCommand {
    type Err = NavigationParseError;

    /// Parses `in`, `out`, `reset`, `pan:DX,DY`, `click:X,Y`, `size:WxH` and
    /// `iter:N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match s.split_once(':') {
            Some((name, argument)) => (name.trim(), Some(argument.trim())),
            None => (s.trim(), None),
        };

        match (name, argument) {
            ("in", None) => Ok(Self::ZoomIn),
            ("out", None) => Ok(Self::ZoomOut),
            ("reset", None) => Ok(Self::ResetView),
            ("pan", Some(argument)) => {
                let (dx, dy) = parse_pair("pan", argument, ',')?;
                Ok(Self::Pan { dx, dy })
            }
            ("click", Some(argument)) => {
                let (x, y) = parse_pair("click", argument, ',')?;
                Ok(Self::Click { x, y })
            }
            ("size", Some(argument)) => {
                let (width, height) = parse_pair("size", argument, 'x')?;
                Ok(Self::Resize { width, height })
            }
            ("iter", Some(argument)) => argument
                .parse()
                .map(Self::SetMaxIterations)
                .map_err(|_| invalid_argument("iter", "an unsigned integer", argument)),
            _ => Err(NavigationParseError::UnknownCommand(s.to_string())),
        }
    }
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pan { dx, dy } => write!(f, "pan:{},{}", dx, dy),
            Self::Click { x, y } => write!(f, "click:{},{}", x, y),
            Self::ZoomIn => f.write_str("in"),
            Self::ZoomOut => f.write_str("out"),
            Self::Resize { width, height } => write!(f, "size:{}x{}", width, height),
            Self::SetMaxIterations(max_iterations) => write!(f, "iter:{}", max_iterations),
            Self::ResetView => f.write_str("reset"),
        }
    }
}

fn parse_pair<T: FromStr>(
    command: &'static str,
    argument: &str,
    separator: char,
) -> Result<(T, T), NavigationParseError> {
    let expected = if separator == 'x' {
        "WIDTHxHEIGHT"
    } else {
        "two integers separated by a comma"
    };

    let (first, second) = argument
        .split_once(separator)
        .ok_or_else(|| invalid_argument(command, expected, argument))?;

    let first = first.trim().parse().map_err(|_| invalid_argument(command, expected, argument))?;
    let second = second.trim().parse().map_err(|_| invalid_argument(command, expected, argument))?;

    Ok((first, second))
}

fn invalid_argument(
    command: &'static str,
    expected: &'static str,
    value: &str,
) -> NavigationParseError {
    NavigationParseError::InvalidArgument {
        command,
        expected,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_zoom_and_reset() {
        assert_eq!("in".parse::<NavigationCommand>(), Ok(NavigationCommand::ZoomIn));
        assert_eq!("out".parse::<NavigationCommand>(), Ok(NavigationCommand::ZoomOut));
        assert_eq!(" reset ".parse::<NavigationCommand>(), Ok(NavigationCommand::ResetView));
    }

    #[test]
    fn test_parses_commands_with_arguments() {
        assert_eq!(
            "pan:-10,25".parse::<NavigationCommand>(),
            Ok(NavigationCommand::Pan { dx: -10, dy: 25 })
        );
        assert_eq!(
            "click: 320, 100".parse::<NavigationCommand>(),
            Ok(NavigationCommand::Click { x: 320, y: 100 })
        );
        assert_eq!(
            "size:800x600".parse::<NavigationCommand>(),
            Ok(NavigationCommand::Resize { width: 800, height: 600 })
        );
        assert_eq!(
            "iter:256".parse::<NavigationCommand>(),
            Ok(NavigationCommand::SetMaxIterations(256))
        );
    }

    #[test]
    fn test_rejects_unknown_command() {
        assert_eq!(
            "spin".parse::<NavigationCommand>(),
            Err(NavigationParseError::UnknownCommand("spin".to_string()))
        );
        assert!("in:3".parse::<NavigationCommand>().is_err());
    }

    #[test]
    fn test_rejects_malformed_arguments() {
        assert!(matches!(
            "pan:10".parse::<NavigationCommand>(),
            Err(NavigationParseError::InvalidArgument { command: "pan", .. })
        ));
        assert!("click:a,b".parse::<NavigationCommand>().is_err());
        assert!("size:-1x5".parse::<NavigationCommand>().is_err());
        assert!("iter:many".parse::<NavigationCommand>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let commands = [
            NavigationCommand::Pan { dx: 3, dy: -4 },
            NavigationCommand::Click { x: 1, y: 2 },
            NavigationCommand::ZoomIn,
            NavigationCommand::ZoomOut,
            NavigationCommand::Resize { width: 5, height: 6 },
            NavigationCommand::SetMaxIterations(7),
            NavigationCommand::ResetView,
        ];

        for command in commands {
            assert_eq!(command.to_string().parse::<NavigationCommand>(), Ok(command));
        }
    }
}
