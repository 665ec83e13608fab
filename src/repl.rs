use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::error::CalcError;
use crate::remote::ResultsApi;

pub const EXIT_COMMAND: &str = "q";

pub const USAGE: &str = "Usage:\n\
\twhen a first symbol on line is '>' – enter operand (number)\n\
\twhen a first symbol on line is '@' – enter operation\n\
\t\toperation is one of '+', '-', '/', '*' or\n\
\t\t'#' followed with number of evaluation step\n\
\t'q' to exit\n";

/// 次に期待する入力の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Operand,
    Operator,
}

impl Turn {
    pub fn prompt(self) -> &'static str {
        match self {
            Turn::Operand => ">",
            Turn::Operator => "@",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Turn::Operand => Turn::Operator,
            Turn::Operator => Turn::Operand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn apply(self, x: f32, y: f32) -> Result<f32, CalcError> {
        match self {
            Operator::Plus => Ok(x + y),
            Operator::Minus => Ok(x - y),
            Operator::Multiply => Ok(x * y),
            Operator::Divide => {
                if y == 0.0 {
                    return Err(CalcError::ZeroDivision);
                }
                Ok(x / y)
            }
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Plus),
            "-" => Ok(Operator::Minus),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(CalcError::UnknownOperator),
        }
    }
}

/// 保留中の演算子を適用する。最初の一歩（演算子なし）はオペランドがそのまま結果になる。
pub fn calc(result: f32, operand: f32, operator: Option<Operator>) -> Result<f32, CalcError> {
    match operator {
        Some(op) => op.apply(result, operand),
        None => Ok(operand),
    }
}

pub fn parse_operand(input: &str) -> Result<f32, CalcError> {
    let value = input
        .trim()
        .parse::<f32>()
        .map_err(|_| CalcError::InvalidNumberFormat)?;
    // inf / NaN は JSON で送れない
    if !value.is_finite() {
        return Err(CalcError::InvalidNumberFormat);
    }
    Ok(value)
}

pub fn parse_result_id(input: &str) -> Result<i32, CalcError> {
    input
        .parse::<i32>()
        .map_err(|_| CalcError::InvalidResultIdFormat)
}

/// 一歩分の処理結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Stored { id: u64, value: f32 },
    OperatorSet(Operator),
    Quit,
}

/// REPL の状態。失敗した一歩は状態を一切変更しない。
#[derive(Debug)]
pub struct Session<A> {
    api: A,
    result: f32,
    turn: Turn,
    operator: Option<Operator>,
}

impl<A: ResultsApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            result: 0.0,
            turn: Turn::Operand,
            operator: None,
        }
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn result(&self) -> f32 {
        self.result
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn step(&mut self, line: &str) -> Result<Outcome, CalcError> {
        if line == EXIT_COMMAND {
            return Ok(Outcome::Quit);
        }

        let outcome = match self.turn {
            Turn::Operand => self.operand_step(line).await?,
            Turn::Operator => self.operator_step(line).await?,
        };
        self.turn = self.turn.toggle();
        Ok(outcome)
    }

    async fn operand_step(&mut self, line: &str) -> Result<Outcome, CalcError> {
        let operand = parse_operand(line)?;
        let value = calc(self.result, operand, self.operator)?;
        let id = self.api.send_result(value).await?;

        self.result = value;
        Ok(Outcome::Stored { id, value })
    }

    async fn operator_step(&mut self, line: &str) -> Result<Outcome, CalcError> {
        if let Some(id) = line.strip_prefix('#') {
            let id = parse_result_id(id)?;
            let value = self.api.get_result(id).await?;
            let new_id = self.api.send_result(value).await?;
            debug!(recalled = id, new_id, value, "result recalled");

            self.result = value;
            return Ok(Outcome::Stored { id: new_id, value });
        }

        let op = line.parse::<Operator>()?;
        self.operator = Some(op);
        Ok(Outcome::OperatorSet(op))
    }
}

/// 入力が尽きるか `q` が入力されるまで REPL を回す
pub async fn run<A, R, W>(session: &mut Session<A>, input: R, output: &mut W) -> std::io::Result<()>
where
    A: ResultsApi,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output.write_all(session.turn().prompt().as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let message = match session.step(&line).await {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::OperatorSet(_)) => continue,
            Ok(Outcome::Stored { id, value }) => format!("[#{}]={}\n", id, value),
            Err(e) => format!("ERROR: {}!!!\n", e),
        };
        output.write_all(message.as_bytes()).await?;
    }

    output.flush().await
}
