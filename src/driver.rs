use crate::linked_list::{self, LinkedList};
use std::fmt;
use std::io::{self, Write};
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug)]
pub enum Error {
    /// The operation name is not one of the list operations. Contains the name that was given
    UnknownOperation(String),
    /// The operation needs a value (e.g. `push_back:5`) but none was given
    MissingValue(String),
    /// The value given to an operation is not a valid i32
    InvalidValue(String, ParseIntError),
    /// Encountered an I/O error when writing the report
    Output(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownOperation(name) => write!(f, "unknown operation \"{}\"", name),
            Error::MissingValue(name) => {
                write!(f, "operation \"{}\" needs a value, e.g. {}:5", name, name)
            }
            Error::InvalidValue(value, err) => write!(f, "invalid value \"{}\": {}", value, err),
            Error::Output(err) => write!(f, "could not write output: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidValue(_, err) => Some(err),
            Error::Output(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Output(err)
    }
}

/// One call into the list's public interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Contains(i32),
    Remove(i32),
    Print,
    Size,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::PushFront(value) => write!(f, "push_front({})", value),
            Op::PushBack(value) => write!(f, "push_back({})", value),
            Op::PopFront => write!(f, "pop_front()"),
            Op::PopBack => write!(f, "pop_back()"),
            Op::Contains(value) => write!(f, "contains({})", value),
            Op::Remove(value) => write!(f, "remove({})", value),
            Op::Print => write!(f, "print()"),
            Op::Size => write!(f, "get_size()"),
        }
    }
}

/// Parses `name` or `name:value`, e.g. `push_back:101` or `pop_front`.
impl FromStr for Op {
    type Err = Error;

    fn from_str(s: &str) -> Result<Op, Error> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };
        let value = || -> Result<i32, Error> {
            let arg = arg.ok_or_else(|| Error::MissingValue(name.to_string()))?;
            arg.parse::<i32>()
                .map_err(|err| Error::InvalidValue(arg.to_string(), err))
        };
        match name {
            "push_front" => Ok(Op::PushFront(value()?)),
            "push_back" => Ok(Op::PushBack(value()?)),
            "pop_front" => Ok(Op::PopFront),
            "pop_back" => Ok(Op::PopBack),
            "contains" => Ok(Op::Contains(value()?)),
            "remove" => Ok(Op::Remove(value()?)),
            "print" => Ok(Op::Print),
            "size" | "get_size" => Ok(Op::Size),
            _ => Err(Error::UnknownOperation(name.to_string())),
        }
    }
}

/// What the list reported back for a single Op.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Inserted,
    Popped(i32),
    Underflow(linked_list::Error),
    Contains(bool),
    Removed(bool),
    Rendered(String),
    Size(usize),
}

impl Outcome {
    /// Inserts and successful pops are already described by the operation itself.
    fn is_silent(&self) -> bool {
        matches!(self, Outcome::Inserted | Outcome::Popped(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Inserted => write!(f, "ok"),
            Outcome::Popped(value) => write!(f, "{}", value),
            Outcome::Underflow(err) => write!(f, "error: {}", err),
            Outcome::Contains(found) => write!(f, "{}", found),
            Outcome::Removed(true) => write!(f, "removed"),
            Outcome::Removed(false) => write!(f, "not found"),
            Outcome::Rendered(rendering) => write!(f, "{}", rendering),
            Outcome::Size(size) => write!(f, "{}", size),
        }
    }
}

/// Applies `op` to `list`. An underflow is reported as an Outcome rather than an Err, since the
/// list is left unchanged and the caller can carry on.
pub fn apply(list: &mut LinkedList, op: Op) -> Outcome {
    log::debug!("Applying {}", op);
    let popped = |result: Result<i32, linked_list::Error>| match result {
        Ok(value) => Outcome::Popped(value),
        Err(err) => {
            log::warn!("{} failed: {}", op, err);
            Outcome::Underflow(err)
        }
    };
    match op {
        Op::PushFront(value) => {
            list.push_front(value);
            Outcome::Inserted
        }
        Op::PushBack(value) => {
            list.push_back(value);
            Outcome::Inserted
        }
        Op::PopFront => popped(list.pop_front()),
        Op::PopBack => popped(list.pop_back()),
        Op::Contains(value) => Outcome::Contains(list.contains(value)),
        Op::Remove(value) => Outcome::Removed(list.remove(value)),
        Op::Print => Outcome::Rendered(list.to_string()),
        Op::Size => Outcome::Size(list.get_size()),
    }
}

/// Parses every operation, failing on the first one that is malformed.
pub fn parse_ops<S: AsRef<str>>(ops: &[S]) -> Result<Vec<Op>, Error> {
    ops.iter().map(|op| op.as_ref().parse()).collect()
}

/// Applies `ops` in order, writing one `op => outcome` line per operation.
pub fn run_ops<W: Write>(list: &mut LinkedList, ops: &[Op], out: &mut W) -> Result<(), Error> {
    for &op in ops {
        let outcome = apply(list, op);
        writeln!(out, "{} => {}", op, outcome)?;
    }
    Ok(())
}

pub struct Step {
    pub op: Op,
    pub caption: &'static str,
}

/// A group of steps followed by a report of the line. An empty heading continues the
/// previous section.
pub struct Section {
    pub heading: &'static str,
    pub steps: &'static [Step],
}

pub struct Scenario {
    pub title: &'static str,
    pub sections: &'static [Section],
}

/// Replays `scenario` against `list`, reporting the line and its length after each section.
pub fn run_scenario<W: Write>(
    list: &mut LinkedList,
    scenario: &Scenario,
    out: &mut W,
) -> Result<(), Error> {
    log::info!("Running scenario \"{}\"", scenario.title);
    writeln!(out, "=== {} ===", scenario.title)?;
    writeln!(out)?;
    for section in scenario.sections {
        if !section.heading.is_empty() {
            writeln!(out, "--- {} ---", section.heading)?;
        }
        for step in section.steps {
            writeln!(out, "{} -- {}", step.op, step.caption)?;
            let outcome = apply(list, step.op);
            if !outcome.is_silent() {
                writeln!(out, "  => {}", outcome)?;
            }
        }
        writeln!(out, "Current line: {}", list)?;
        writeln!(out, "People waiting: {}", list.get_size())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Customers queue at an ice cream shop: arrivals join the back, a VIP cuts to the front,
/// customers are served from the front and the last one in line gives up.
pub const TICKET_QUEUE: Scenario = Scenario {
    title: "Farr's Ice Cream Ticket Queue",
    sections: &[
        Section {
            heading: "1. Customers arriving at Farr's",
            steps: &[
                Step { op: Op::PushBack(101), caption: "Ticket #101 arrives" },
                Step { op: Op::PushBack(102), caption: "Ticket #102 arrives" },
                Step { op: Op::PushBack(103), caption: "Ticket #103 arrives" },
            ],
        },
        Section {
            heading: "2. VIP cuts to the front",
            steps: &[Step { op: Op::PushFront(200), caption: "VIP cuts to the front!" }],
        },
        Section {
            heading: "3. Serving customers",
            steps: &[Step { op: Op::PopFront, caption: "Serving ticket at the front" }],
        },
        Section {
            heading: "",
            steps: &[Step { op: Op::PopFront, caption: "Serving another ticket" }],
        },
        Section {
            heading: "4. More customers arrive",
            steps: &[
                Step { op: Op::PushBack(104), caption: "Ticket #104 arrives" },
                Step { op: Op::PushBack(105), caption: "Ticket #105 arrives" },
            ],
        },
        Section {
            heading: "5. Customer at the back gives up",
            steps: &[Step { op: Op::PopBack, caption: "Ticket at the back gives up waiting" }],
        },
    ],
};

/// Customers leave from the back, the middle and the front of the line, then someone looks
/// for a ticket that is already gone.
pub const REMOVAL: Scenario = Scenario {
    title: "Closing Time at Farr's",
    sections: &[
        Section {
            heading: "1. Line before closing time",
            steps: &[
                Step { op: Op::PushBack(1001), caption: "Ticket #1001 arrives" },
                Step { op: Op::PushBack(1002), caption: "Ticket #1002 arrives" },
                Step { op: Op::PushBack(1003), caption: "Ticket #1003 arrives" },
                Step { op: Op::PushBack(1004), caption: "Ticket #1004 arrives" },
                Step { op: Op::PushBack(1005), caption: "Ticket #1005 arrives" },
            ],
        },
        Section {
            heading: "2. Customers leave from anywhere in line",
            steps: &[Step { op: Op::Remove(1005), caption: "Ticket at the back leaves" }],
        },
        Section {
            heading: "",
            steps: &[Step { op: Op::Remove(1002), caption: "Ticket in the middle leaves" }],
        },
        Section {
            heading: "",
            steps: &[Step { op: Op::Remove(1001), caption: "Ticket at the front leaves" }],
        },
        Section {
            heading: "3. Looking for someone who already left",
            steps: &[
                Step { op: Op::Contains(1002), caption: "Is ticket #1002 still waiting?" },
                Step { op: Op::Remove(1002), caption: "Ticket #1002 cannot leave twice" },
            ],
        },
    ],
};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_ops() {
        assert_eq!("push_back:101".parse::<Op>().unwrap(), Op::PushBack(101));
        assert_eq!(" push_front : -3 ".parse::<Op>().unwrap(), Op::PushFront(-3));
        assert_eq!("pop_back".parse::<Op>().unwrap(), Op::PopBack);
        assert_eq!("get_size".parse::<Op>().unwrap(), Op::Size);
        assert_eq!(
            parse_ops(&["contains:1", "remove:2", "print"]).unwrap(),
            vec![Op::Contains(1), Op::Remove(2), Op::Print]
        );
    }

    #[test]
    fn test_parse_bad_ops() {
        assert!(matches!(
            "pop_middle".parse::<Op>(),
            Err(Error::UnknownOperation(name)) if name == "pop_middle"
        ));
        assert!(matches!(
            "push_back".parse::<Op>(),
            Err(Error::MissingValue(name)) if name == "push_back"
        ));
        assert!(matches!(
            "remove:ten".parse::<Op>(),
            Err(Error::InvalidValue(value, _)) if value == "ten"
        ));
        assert!(parse_ops(&["print", "nope"]).is_err());
    }

    #[test]
    fn test_apply_reports_underflow() {
        let mut list = LinkedList::new();
        assert_eq!(
            apply(&mut list, Op::PopFront),
            Outcome::Underflow(linked_list::Error::Underflow)
        );
        assert_eq!(apply(&mut list, Op::PushFront(4)), Outcome::Inserted);
        assert_eq!(apply(&mut list, Op::Print), Outcome::Rendered("4 -> <end>".to_string()));
        assert_eq!(apply(&mut list, Op::PopBack), Outcome::Popped(4));
        assert_eq!(apply(&mut list, Op::Size), Outcome::Size(0));
    }

    #[test]
    fn test_run_ops() {
        let mut list = LinkedList::new();
        let ops = parse_ops(&["push_back:1", "push_front:0", "contains:1", "remove:5", "pop_back", "print"])
            .unwrap();
        let mut out = Vec::new();
        run_ops(&mut list, &ops, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "push_back(1) => ok\n\
             push_front(0) => ok\n\
             contains(1) => true\n\
             remove(5) => not found\n\
             pop_back() => 1\n\
             print() => 0 -> <end>\n"
        );
    }

    #[test]
    fn test_ticket_queue_scenario_final_state() {
        let mut list = LinkedList::new();
        let mut out = Vec::new();
        run_scenario(&mut list, &TICKET_QUEUE, &mut out).unwrap();
        assert_eq!(list.to_string(), "102 -> 103 -> 104 -> <end>");
        assert_eq!(list.get_size(), 3);
    }

    #[test]
    fn test_removal_scenario_output() {
        let mut list = LinkedList::new();
        let mut out = Vec::new();
        run_scenario(&mut list, &REMOVAL, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("=== Closing Time at Farr's ===\n\n"));
        assert!(out.contains(
            "remove(1005) -- Ticket at the back leaves\n  => removed\n\
             Current line: 1001 -> 1002 -> 1003 -> 1004 -> <end>\nPeople waiting: 4\n"
        ));
        assert!(out.contains("contains(1002) -- Is ticket #1002 still waiting?\n  => false\n"));
        assert!(out.contains("remove(1002) -- Ticket #1002 cannot leave twice\n  => not found\n"));
        assert_eq!(list.to_string(), "1003 -> 1004 -> <end>");
    }
}
