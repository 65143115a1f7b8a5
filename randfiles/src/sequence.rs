use crate::alpha::gen_alpha_string;
use crate::config::Config;
use crate::error::RandFilesError;
use rand::Rng;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub first: u32,
    pub second: u32,
    pub product: u32,
}

/// Everything a run wrote and printed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub files: Vec<WrittenFile>,
    pub product: Product,
}

/// Write `len` random letters plus a newline to `path`, overwriting it,
/// then print the letters to `out`.
pub fn write_random_file<R, W>(
    rng: &mut R,
    path: &Path,
    len: usize,
    out: &mut W,
) -> Result<String, RandFilesError>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let content = {
        let mut file = File::create(path).map_err(|source| RandFilesError::Create {
            path: path.to_owned(),
            source,
        })?;

        let content = gen_alpha_string(rng, len);
        file.write_all(format!("{}\n", content).as_bytes())
            .map_err(|source| RandFilesError::Write {
                path: path.to_owned(),
                source,
            })?;

        content
    };

    debug!("wrote {} letters to {:?}", len, path);
    writeln!(out, "{}", content)?;

    Ok(content)
}

/// Write one random file per configured name, in order, inside `dir`.
///
/// Stops at the first failure: files written before it are left in place,
/// the remaining ones are never created.
pub fn write_random_files<R, W>(
    rng: &mut R,
    conf: &Config,
    dir: &Path,
    out: &mut W,
) -> Result<Vec<WrittenFile>, RandFilesError>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let mut written = Vec::with_capacity(conf.filenames.len());

    for name in conf.filenames.iter() {
        let path = dir.join(name);
        let content = write_random_file(rng, &path, conf.string_len, out)?;
        written.push(WrittenFile { path, content });
    }

    Ok(written)
}

/// Draw two integers from the inclusive range `[min, max]` and multiply them
pub fn draw_product<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> Product {
    let first = rng.gen_range(min..=max);
    let second = rng.gen_range(min..=max);

    debug!("drew {} and {}", first, second);

    Product {
        first,
        second,
        product: first * second,
    }
}

pub fn report_product<W: Write + ?Sized>(p: &Product, out: &mut W) -> Result<(), RandFilesError> {
    writeln!(out, "{}", p.first)?;
    writeln!(out, "{}", p.second)?;
    writeln!(out, "{}", p.product)?;
    Ok(())
}

/// Write the random files, then draw and report the product
pub fn run<R, W>(rng: &mut R, conf: &Config, dir: &Path, out: &mut W) -> Result<Report, RandFilesError>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    info!("writing {} files into {:?}", conf.filenames.len(), dir);

    let files = write_random_files(rng, conf, dir, out)?;
    let product = draw_product(rng, conf.min_value, conf.max_value);
    report_product(&product, out)?;

    info!("done");

    Ok(Report { files, product })
}
