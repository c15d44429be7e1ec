use rusqlite::Connection;

/// In-memory database with a small, fixed set of movies.
///
/// Ratings: 1 → 9,8,7 (avg 8.0); 2 → 6,7 (6.5); 3 → 8,8,8,8 (8.0);
/// 4 → 10; 5 and 6 have none. Movie 6 has no release date or runtime.
pub fn setup_db() -> Connection {
    let conn = movielens_db::open_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO Movies (Movie_ID, Title, Release_Date, Runtime, Original_Language, Budget, Revenue) VALUES
             (1, 'Toy Story', '1995-10-30', 81, 'en', 30000000, 373554033),
             (2, 'Jumanji', '1995-12-15', 104, 'en', 65000000, 262797249),
             (3, 'Toy Story 2', '1999-10-30', 92, 'en', 90000000, 497366869),
             (4, 'Heat', '1995-12-15', 170, 'en', 60000000, 187436818),
             (5, 'Sabrina', '1995-12-15', 127, 'en', 58000000, 0),
             (6, 'Untitled Project', NULL, NULL, 'fr', NULL, NULL);

         INSERT INTO Ratings (Movie_ID, Rating) VALUES
             (1, 9), (1, 8), (1, 7),
             (2, 6), (2, 7),
             (3, 8), (3, 8), (3, 8), (3, 8),
             (4, 10);

         INSERT INTO Movie_Taglines (Movie_ID, Tagline) VALUES
             (1, 'The adventure takes off!'),
             (4, 'A Los Angeles Crime Saga');

         INSERT INTO Genres (Genre_ID, Genre_Name) VALUES
             (1, 'Animation'), (2, 'Comedy'), (3, 'Family'), (4, 'Crime'), (5, 'Drama');
         INSERT INTO Movie_Genres (Movie_ID, Genre_ID) VALUES
             (1, 3), (1, 1), (1, 2),
             (2, 3),
             (4, 5), (4, 4);

         INSERT INTO Companies (Company_ID, Company_Name) VALUES
             (1, 'Pixar Animation Studios'), (2, 'Walt Disney Pictures'), (3, 'Warner Bros.');
         INSERT INTO Movie_Production_Companies (Movie_ID, Company_ID) VALUES
             (1, 2), (1, 1),
             (3, 1), (3, 2),
             (4, 3);",
    )
    .unwrap();
    conn
}

#[allow(dead_code)]
pub fn count_where(conn: &Connection, table: &str, movie_id: i64) -> i64 {
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {table} WHERE Movie_ID = ?1"),
        [movie_id],
        |row| row.get(0),
    )
    .unwrap()
}
