//! Sharded TSV output streams.
//!
//! Every emitted edge lands in one of `nfiles` training shards or the
//! matching validation shard, selected by `user_id mod nfiles` so all of
//! a user's ratings stay in one partition. Streams are owned
//! `BufWriter<File>` values: dropping the writer closes every file on any
//! exit path, and [`ShardedWriter::finish`] flushes explicitly so write
//! errors surface before the run reports success.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::OutputError;

/// Writer over `nfiles` training/validation shard file pairs.
///
/// Shard `i` consists of `graph_<i>.tsv` (training) and
/// `graph_<i>.tsv.validate` (validation). Each record is one line
/// `"<user_id>\t<item_id>\t<rating>\n"`, with the rating in Rust's
/// default `f64` formatting (shortest round-trip form). Existing files
/// are truncated.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use synth_core::writer::ShardedWriter;
///
/// # fn main() -> Result<(), synth_core::error::OutputError> {
/// let mut writer = ShardedWriter::create(Path::new("synthetic_data"), 5)?;
/// writer.write_training(3, 1003, 0.5)?;
/// writer.write_validation(4, 1003, -1.25)?;
/// writer.finish()?;
/// # Ok(())
/// # }
/// ```
pub struct ShardedWriter {
    /// Training streams, index `i` backing `graph_<i>.tsv`.
    train: Vec<BufWriter<File>>,
    /// Validation streams, index `i` backing `graph_<i>.tsv.validate`.
    validation: Vec<BufWriter<File>>,
    /// Number of shard pairs.
    nfiles: u64,
}

impl ShardedWriter {
    /// Opens all `2 * nfiles` shard streams under `dir`.
    ///
    /// The directory must already exist. `nfiles` must be at least 1
    /// (enforced by configuration validation upstream).
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::CreateShard`] naming the first file that
    /// could not be created.
    pub fn create(dir: &Path, nfiles: u64) -> Result<Self, OutputError> {
        debug_assert!(nfiles > 0, "shard routing requires at least one file");

        let mut train = Vec::with_capacity(nfiles as usize);
        let mut validation = Vec::with_capacity(nfiles as usize);

        for i in 0..nfiles {
            let path = dir.join(format!("graph_{}.tsv", i));
            let file = File::create(&path)
                .map_err(|source| OutputError::CreateShard { path, source })?;
            train.push(BufWriter::new(file));

            let path = dir.join(format!("graph_{}.tsv.validate", i));
            let file = File::create(&path)
                .map_err(|source| OutputError::CreateShard { path, source })?;
            validation.push(BufWriter::new(file));
        }

        Ok(Self {
            train,
            validation,
            nfiles,
        })
    }

    /// Returns the number of shard pairs.
    #[inline]
    pub fn nfiles(&self) -> u64 {
        self.nfiles
    }

    /// Returns the shard index owning the given user's records.
    #[inline]
    pub fn shard_index(&self, user_id: u64) -> u64 {
        user_id % self.nfiles
    }

    /// Appends one training record to the user's shard.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Write`] if the stream write fails.
    #[inline]
    pub fn write_training(
        &mut self,
        user_id: u64,
        item_id: u64,
        rating: f64,
    ) -> Result<(), OutputError> {
        let shard = self.shard_index(user_id) as usize;
        writeln!(self.train[shard], "{}\t{}\t{}", user_id, item_id, rating)?;
        Ok(())
    }

    /// Appends one validation record to the user's validation shard.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Write`] if the stream write fails.
    #[inline]
    pub fn write_validation(
        &mut self,
        user_id: u64,
        item_id: u64,
        rating: f64,
    ) -> Result<(), OutputError> {
        let shard = self.shard_index(user_id) as usize;
        writeln!(self.validation[shard], "{}\t{}\t{}", user_id, item_id, rating)?;
        Ok(())
    }

    /// Flushes every stream and closes the writer.
    ///
    /// Dropping the writer without calling this still closes the files,
    /// but buffered data errors would then be swallowed; `finish` turns
    /// them into [`OutputError::Flush`].
    pub fn finish(mut self) -> Result<(), OutputError> {
        for stream in self.train.iter_mut().chain(self.validation.iter_mut()) {
            stream.flush().map_err(OutputError::Flush)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_creates_shard_files() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ShardedWriter::create(dir.path(), 3).unwrap();

        assert_eq!(writer.nfiles(), 3);
        writer.finish().unwrap();

        for i in 0..3 {
            assert!(dir.path().join(format!("graph_{}.tsv", i)).is_file());
            assert!(dir.path().join(format!("graph_{}.tsv.validate", i)).is_file());
        }
    }

    #[test]
    fn test_shard_index_is_user_modulo() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ShardedWriter::create(dir.path(), 3).unwrap();

        assert_eq!(writer.shard_index(0), 0);
        assert_eq!(writer.shard_index(7), 1);
        assert_eq!(writer.shard_index(8), 2);
        assert_eq!(writer.shard_index(9), 0);
    }

    #[test]
    fn test_record_format() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ShardedWriter::create(dir.path(), 1).unwrap();

        writer.write_training(3, 17, 1.5).unwrap();
        writer.write_training(4, 17, 2.0).unwrap();
        writer.write_training(5, 18, -0.25).unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(dir.path().join("graph_0.tsv")).unwrap();
        assert_eq!(content, "3\t17\t1.5\n4\t17\t2\n5\t18\t-0.25\n");
    }

    #[test]
    fn test_write_routes_by_user_modulo() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ShardedWriter::create(dir.path(), 2).unwrap();

        for user_id in 0..6u64 {
            writer.write_training(user_id, 10, 1.0).unwrap();
        }
        writer.finish().unwrap();

        let even = fs::read_to_string(dir.path().join("graph_0.tsv")).unwrap();
        let odd = fs::read_to_string(dir.path().join("graph_1.tsv")).unwrap();

        let even_users: Vec<u64> = even
            .lines()
            .map(|line| line.split('\t').next().unwrap().parse().unwrap())
            .collect();
        let odd_users: Vec<u64> = odd
            .lines()
            .map(|line| line.split('\t').next().unwrap().parse().unwrap())
            .collect();

        assert_eq!(even_users, vec![0, 2, 4]);
        assert_eq!(odd_users, vec![1, 3, 5]);
    }

    #[test]
    fn test_training_and_validation_streams_are_disjoint() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ShardedWriter::create(dir.path(), 1).unwrap();

        writer.write_training(0, 10, 1.0).unwrap();
        writer.write_validation(0, 10, 2.0).unwrap();
        writer.finish().unwrap();

        let train = fs::read_to_string(dir.path().join("graph_0.tsv")).unwrap();
        let validate = fs::read_to_string(dir.path().join("graph_0.tsv.validate")).unwrap();

        assert_eq!(train, "0\t10\t1\n");
        assert_eq!(validate, "0\t10\t2\n");
    }

    #[test]
    fn test_create_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist");

        let result = ShardedWriter::create(&missing, 1);
        match result {
            Err(OutputError::CreateShard { path, .. }) => {
                assert!(path.ends_with("graph_0.tsv"));
            }
            other => panic!("Expected CreateShard error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_truncates_existing_files() {
        let dir = tempfile::tempdir().unwrap();

        let mut writer = ShardedWriter::create(dir.path(), 1).unwrap();
        writer.write_training(0, 10, 1.0).unwrap();
        writer.finish().unwrap();

        // A second writer over the same directory starts from empty files.
        let writer = ShardedWriter::create(dir.path(), 1).unwrap();
        writer.finish().unwrap();

        let content = fs::read_to_string(dir.path().join("graph_0.tsv")).unwrap();
        assert!(content.is_empty());
    }
}
