//! Interactive command loop.
//!
//! Reads single-character commands until `x` or end of input and runs the
//! matching command against the open database.

use std::io::{self, BufRead, Write};

use movielens_db::Connection;

use crate::commands::update::RATING_RANGE;
use crate::commands::{parse_int, query, update};

const COMMAND_PROMPT: &str = "Please enter a command (1-5, x to exit): ";

pub(crate) struct Shell<'a, R, W> {
    conn: &'a Connection,
    input: R,
    out: W,
    max_search_results: usize,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub(crate) fn new(conn: &'a Connection, input: R, out: W, max_search_results: usize) -> Self {
        Self {
            conn,
            input,
            out,
            max_search_results,
        }
    }

    /// Run until the user types `x` or input is exhausted.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        while let Some(cmd) = self.prompt(COMMAND_PROMPT)? {
            let cmd = cmd.trim();
            if cmd == "x" {
                break;
            }
            writeln!(self.out)?;
            match cmd {
                "1" => self.search()?,
                "2" => self.show()?,
                "3" => self.top()?,
                "4" => self.review()?,
                "5" => self.tagline()?,
                _ => writeln!(self.out, "**Error, unknown command, try again...")?,
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Print `text` and read one line, without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(pattern) = self.prompt("Enter movie name (wildcards _ and % supported): ")? else {
            return Ok(());
        };
        writeln!(self.out)?;
        query::run_search(self.conn, &mut self.out, &pattern, self.max_search_results)
    }

    fn show(&mut self) -> io::Result<()> {
        let Some(raw_id) = self.prompt("Enter movie id: ")? else {
            return Ok(());
        };
        writeln!(self.out)?;
        query::run_show(self.conn, &mut self.out, &raw_id)
    }

    fn top(&mut self) -> io::Result<()> {
        let Some(raw_n) = self.prompt("N? ")? else {
            return Ok(());
        };
        let Some(n) = parse_int("top N", &raw_n) else {
            return Ok(());
        };
        if n < 1 {
            return writeln!(self.out, "Please enter a positive value for N...");
        }

        let Some(raw_min) = self.prompt("min number of reviews? ")? else {
            return Ok(());
        };
        let Some(min) = parse_int("top N", &raw_min) else {
            return Ok(());
        };
        if min < 1 {
            return writeln!(
                self.out,
                "Please enter a positive value for min number of reviews..."
            );
        }

        writeln!(self.out)?;
        query::run_top(self.conn, &mut self.out, n, min)
    }

    fn review(&mut self) -> io::Result<()> {
        let Some(raw_rating) = self.prompt("Enter rating (0..10): ")? else {
            return Ok(());
        };
        let Some(rating) = parse_int("add_review", &raw_rating) else {
            return Ok(());
        };
        if !RATING_RANGE.contains(&rating) {
            return writeln!(self.out, "Invalid rating...");
        }

        let Some(raw_id) = self.prompt("Enter movie id: ")? else {
            return Ok(());
        };
        writeln!(self.out)?;
        update::run_review(self.conn, &mut self.out, &raw_id, rating)
    }

    fn tagline(&mut self) -> io::Result<()> {
        let Some(tagline) = self.prompt("tagline? ")? else {
            return Ok(());
        };
        let Some(raw_id) = self.prompt("movie id? ")? else {
            return Ok(());
        };
        writeln!(self.out)?;
        update::run_tagline(self.conn, &mut self.out, &raw_id, &tagline)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn setup_db() -> Connection {
        let conn = movielens_db::open_memory().unwrap();
        conn.execute_batch(
            "INSERT INTO Movies (Movie_ID, Title, Release_Date, Runtime, Original_Language, Budget, Revenue) VALUES
                 (5, 'Four Rooms', '1995-12-09', 98, 'en', 4000000, 4300000),
                 (11, 'Star Wars', '1977-05-25', 121, 'en', 11000000, 775398007),
                 (12, 'Finding Nemo', '2003-05-30', 100, 'en', 94000000, 940335536);
             INSERT INTO Ratings (Movie_ID, Rating) VALUES (11, 9), (11, 8), (12, 7);
             INSERT INTO Genres (Genre_ID, Genre_Name) VALUES (1, 'Science Fiction'), (2, 'Adventure');
             INSERT INTO Movie_Genres (Movie_ID, Genre_ID) VALUES (11, 1), (11, 2);
             INSERT INTO Companies (Company_ID, Company_Name) VALUES (1, 'Lucasfilm');
             INSERT INTO Movie_Production_Companies (Movie_ID, Company_ID) VALUES (11, 1);
             INSERT INTO Movie_Taglines (Movie_ID, Tagline) VALUES (11, 'A long time ago in a galaxy far, far away...');",
        )
        .unwrap();
        conn
    }

    fn run_script(conn: &Connection, script: &str, max: usize) -> String {
        let mut out = Vec::new();
        Shell::new(conn, Cursor::new(script.as_bytes()), &mut out, max)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let conn = setup_db();
        assert_eq!(run_script(&conn, "x\n", 100), COMMAND_PROMPT);
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let conn = setup_db();
        assert_eq!(run_script(&conn, "", 100), COMMAND_PROMPT);
    }

    #[test]
    fn test_unknown_command() {
        let conn = setup_db();
        let out = run_script(&conn, "9\nx\n", 100);
        assert!(out.contains("**Error, unknown command, try again..."));
        assert_eq!(out.matches(COMMAND_PROMPT).count(), 2);
    }

    #[test]
    fn test_search_lists_matches() {
        let conn = setup_db();
        let out = run_script(&conn, "1\n%o%\nx\n", 100);
        assert!(out.contains("# of movies found: 2\n"));
        assert!(out.contains("5 : Four Rooms (1995)\n"));
        assert!(out.contains("12 : Finding Nemo (2003)\n"));
        assert!(!out.contains("Star Wars"));
    }

    #[test]
    fn test_search_over_cap_is_not_listed() {
        let conn = setup_db();
        let out = run_script(&conn, "1\n%\nx\n", 2);
        assert!(out.contains("# of movies found: 3\n"));
        assert!(out.contains("There are too many movies to display"));
        assert!(!out.contains("Four Rooms"));
    }

    #[test]
    fn test_search_no_match() {
        let conn = setup_db();
        let out = run_script(&conn, "1\nZzz%\nx\n", 100);
        assert!(out.contains("# of movies found: 0\n"));
    }

    #[test]
    fn test_show_detail() {
        let conn = setup_db();
        let out = run_script(&conn, "2\n11\nx\n", 100);
        assert!(out.contains("11 : Star Wars\n"));
        assert!(out.contains("  Release date: 1977-05-25\n"));
        assert!(out.contains("  Budget: $11,000,000 (USD)\n"));
        assert!(out.contains("  Revenue: $775,398,007 (USD)\n"));
        assert!(out.contains("  Num reviews: 2\n"));
        assert!(out.contains("  Avg rating: 8.50 (0..10)\n"));
        assert!(out.contains("  Genres: Adventure, Science Fiction, \n"));
        assert!(out.contains("  Production companies: Lucasfilm, \n"));
        assert!(out.contains("  Tagline: A long time ago in a galaxy far, far away...\n"));
    }

    #[test]
    fn test_show_missing_or_malformed_id() {
        let conn = setup_db();
        let out = run_script(&conn, "2\n999999\n2\nabc\nx\n", 100);
        assert_eq!(out.matches("No such movie...").count(), 2);
    }

    #[test]
    fn test_top_n() {
        let conn = setup_db();
        let out = run_script(&conn, "3\n5\n1\nx\n", 100);
        let a = out
            .find("11 : Star Wars (1977), avg rating = 8.50 (2 reviews)")
            .unwrap();
        let b = out
            .find("12 : Finding Nemo (2003), avg rating = 7.00 (1 reviews)")
            .unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_top_n_rejects_non_positive() {
        let conn = setup_db();
        let out = run_script(&conn, "3\n0\n3\n2\n-1\nx\n", 100);
        assert!(out.contains("Please enter a positive value for N..."));
        assert!(out.contains("Please enter a positive value for min number of reviews..."));
        assert!(!out.contains("avg rating"));
    }

    #[test]
    fn test_review_inserted_and_counted() {
        let conn = setup_db();
        let out = run_script(&conn, "4\n8\n5\n4\n8\n999999\nx\n", 100);
        assert!(out.contains("Review successfully inserted"));
        assert!(out.contains("No such movie..."));
        assert_eq!(movielens_db::rating_stats(&conn, 5).unwrap().num_reviews, 1);
    }

    #[test]
    fn test_review_rejects_out_of_range_rating() {
        let conn = setup_db();
        let out = run_script(&conn, "4\n11\n4\n-1\nx\n", 100);
        assert_eq!(out.matches("Invalid rating...").count(), 2);
        // Never asked for a movie id
        assert!(!out.contains("Enter movie id: "));
        assert_eq!(movielens_db::num_reviews(&conn).unwrap(), 3);
    }

    #[test]
    fn test_tagline_set_then_replaced() {
        let conn = setup_db();
        let out = run_script(&conn, "5\nFour rooms. Four crimes.\n5\n5\nTwelve\n5\nx\n", 100);
        assert_eq!(out.matches("Tagline successfully set").count(), 2);
        assert_eq!(
            movielens_db::tagline(&conn, 5).unwrap().as_deref(),
            Some("Twelve")
        );
    }

    #[test]
    fn test_tagline_keeps_inner_whitespace_and_allows_empty() {
        let conn = setup_db();
        run_script(&conn, "5\n  spaced out  \n12\nx\n", 100);
        assert_eq!(
            movielens_db::tagline(&conn, 12).unwrap().as_deref(),
            Some("  spaced out  ")
        );
        let out = run_script(&conn, "5\n\n12\nx\n", 100);
        assert!(out.contains("Tagline successfully set"));
        assert_eq!(movielens_db::tagline(&conn, 12).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_tagline_missing_movie() {
        let conn = setup_db();
        let out = run_script(&conn, "5\nghost\n404\nx\n", 100);
        assert!(out.contains("No such movie..."));
        assert!(movielens_db::tagline(&conn, 404).unwrap().is_none());
    }

    #[test]
    fn test_crlf_input() {
        let conn = setup_db();
        let out = run_script(&conn, "2\r\n5\r\nx\r\n", 100);
        assert!(out.contains("5 : Four Rooms\n"));
    }
}
