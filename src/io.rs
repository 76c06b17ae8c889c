// Arrays are written length first (`3 1 2 3`), absent values as `null` or `#`,
// and the empty string as `""`

use std::str::{self, FromStr};

use crate::error::{Error, Result};

pub trait InputStream {
    fn token(&mut self) -> Option<&[u8]>;
    fn line(&mut self) -> Option<&[u8]>;

    fn skip_line(&mut self) {
        self.line();
    }

    fn value<T: FromStr>(&mut self) -> Result<T> {
        let token = self
            .token()
            .ok_or(Error::UnexpectedEof(std::any::type_name::<T>()))?;
        str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| Error::parse::<T>(token))
    }

    // None for `null` / `#`
    fn opt_value<T: FromStr>(&mut self) -> Result<Option<T>> {
        let token = self
            .token()
            .ok_or(Error::UnexpectedEof(std::any::type_name::<T>()))?;
        if is_null(token) {
            return Ok(None);
        }
        str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Some)
            .ok_or_else(|| Error::parse::<T>(token))
    }

    fn word(&mut self) -> Result<String> {
        let token = self.token().ok_or(Error::UnexpectedEof("word"))?;
        if token == b"\"\"" {
            return Ok(String::new());
        }
        str::from_utf8(token)
            .map(str::to_owned)
            .map_err(|_| Error::parse::<String>(token))
    }

    fn vec<T: FromStr>(&mut self, n: usize) -> Result<Vec<T>> {
        (0..n).map(|_| self.value()).collect()
    }

    fn counted_vec<T: FromStr>(&mut self) -> Result<Vec<T>> {
        let n = self.value()?;
        self.vec(n)
    }

    fn opt_vec<T: FromStr>(&mut self) -> Result<Vec<Option<T>>> {
        let n: usize = self.value()?;
        (0..n).map(|_| self.opt_value()).collect()
    }

    fn words(&mut self) -> Result<Vec<String>> {
        let n: usize = self.value()?;
        (0..n).map(|_| self.word()).collect()
    }

    // `rows cols` followed by rows * cols values
    fn matrix<T: FromStr>(&mut self) -> Result<Vec<Vec<T>>> {
        let (rows, cols): (usize, usize) = (self.value()?, self.value()?);
        (0..rows).map(|_| self.vec(cols)).collect()
    }

    // `rows` followed by one token per row
    fn char_grid(&mut self) -> Result<Vec<Vec<u8>>> {
        let rows: usize = self.value()?;
        (0..rows)
            .map(|_| {
                self.token()
                    .map(<[u8]>::to_vec)
                    .ok_or(Error::UnexpectedEof("grid row"))
            })
            .collect()
    }

    fn pairs<T: FromStr>(&mut self) -> Result<Vec<[T; 2]>> {
        let n: usize = self.value()?;
        (0..n)
            .map(|_| -> Result<[T; 2]> { Ok([self.value()?, self.value()?]) })
            .collect()
    }
}

fn is_null(token: &[u8]) -> bool {
    matches!(token, b"null" | b"#")
}

#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

fn trim_newline(s: &[u8]) -> &[u8] {
    let mut s = s;
    while s
        .last()
        .map(|&c| matches! {c, b'\n' | b'\r' | 0})
        .unwrap_or(false)
    {
        s = &s[..s.len() - 1];
    }
    s
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Option<&[u8]> {
        let idx = self.iter().position(|&c| !is_whitespace(c))?;
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, buf_new) = self.split_at(idx);
        *self = buf_new;
        Some(token)
    }

    fn line(&mut self) -> Option<&[u8]> {
        if self.is_empty() {
            return None;
        }
        let idx = self
            .iter()
            .position(|&c| c == b'\n')
            .map(|idx| idx + 1)
            .unwrap_or(self.len());
        let (line, buf_new) = self.split_at(idx);
        *self = buf_new;
        Some(trim_newline(line))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stream() {
        let source = " 2 3 4 5 \r\n 2 4 \n\n\n-19235 3\nabcdefg -0.12e+5\n123\r\n";
        let mut input = source.as_bytes();
        assert_eq!(input.line(), Some(" 2 3 4 5 ".as_bytes()));
        let (n, k): (usize, usize) = (input.value().unwrap(), input.value().unwrap());
        let v: Vec<i32> = input.vec(2).unwrap();
        assert_eq!((n, k), (2, 4));
        assert_eq!(v, [-19235, 3]);
        assert_eq!(input.word().unwrap(), "abcdefg");
        assert_eq!(input.value::<f64>().unwrap(), -0.12e+5);
        assert_eq!(input.line(), Some("".as_bytes()));
        assert_eq!(input.line(), Some("123".as_bytes()));
        assert_eq!(input.line(), None);
    }

    #[test]
    fn test_structured() {
        let mut input = "3 1 2 3 4 1 null # 7 \"\" 2 ab cd".as_bytes();
        assert_eq!(input.counted_vec::<i32>().unwrap(), [1, 2, 3]);
        assert_eq!(
            input.opt_vec::<i32>().unwrap(),
            [Some(1), None, None, Some(7)]
        );
        assert_eq!(input.word().unwrap(), "");
        assert_eq!(input.char_grid().unwrap(), [b"ab".to_vec(), b"cd".to_vec()]);
        assert!(matches!(
            input.value::<i32>(),
            Err(Error::UnexpectedEof(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        let mut input = "x1".as_bytes();
        assert!(matches!(input.value::<u32>(), Err(Error::Parse { .. })));
    }
}
