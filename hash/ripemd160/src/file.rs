use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::{debug, warn};

use crate::{Digest, Output, Result, Ripemd160};

const READ_CHUNK: usize = 1024;

/// Compute the RIPEMD-160 digest of a file's contents.
///
/// The file is read in 1 KiB chunks and streamed through the hasher. Failing
/// to open or read the file aborts the hash and returns `Error::Io`; nothing
/// is retried except reads interrupted by a signal.
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Output> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|err| {
        warn!("cannot open {}: {}", path.display(), err);
        err
    })?;

    let mut hasher = Ripemd160::new();
    let mut buf = [0u8; READ_CHUNK];
    let mut total = 0u64;
    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!("read failed on {} after {} bytes: {}", path.display(), total, err);
                return Err(err.into());
            }
        };
        hasher.input(&buf[..n]);
        total += n as u64;
    }

    debug!("hashed {} bytes from {}", total, path.display());
    Ok(hasher.result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use hex_literal::hex;
    use std::io::Write;

    #[test]
    fn hashes_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"message digest").unwrap();
        file.flush().unwrap();

        let digest = hash_file(file.path()).unwrap();
        assert_eq!(digest[..], hex!("5d0689ef49d2fae572b881b123a85ffa21595f36"));
    }

    #[test]
    fn empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let digest = hash_file(file.path()).unwrap();
        assert_eq!(digest[..], hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31"));
    }

    #[test]
    fn file_spanning_several_reads() {
        let data: Vec<u8> = (0..READ_CHUNK * 3 + 17).map(|i| (i % 251) as u8).collect();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();
        file.flush().unwrap();

        assert_eq!(hash_file(file.path()).unwrap(), crate::hash(&data));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = hash_file(dir.path().join("missing")).unwrap_err();
        match err {
            Error::Io(io) => assert_eq!(io.kind(), ErrorKind::NotFound),
        }
    }

    #[cfg(unix)]
    #[test]
    fn read_failure_is_io_error() {
        // Opening a directory works on unix, reading from it does not.
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(hash_file(dir.path()), Err(Error::Io(_))));
    }
}
