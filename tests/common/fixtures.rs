//! Static CSV corpora used across harnesses.
//!
//! Each corpus is a complete document (header + rows) in the shape the
//! statistics portals publish: a time-code column, a value column, and
//! assorted metadata columns the normalizer ignores.

/// Monthly CPI-style series, all rows valid, deliberately out of order.
pub const CSV_MONTHLY: &str = "\
time_code,region,value
202003,全国,101.8
202001,全国,101.2
202002,全国,101.5
202004,全国,101.9
";

/// Annual GDP-style series with 4-digit codes.
pub const CSV_ANNUAL: &str = "\
time_code,value
2017,553.1
2018,556.6
2019,557.9
";

/// 8-digit codes. The day part is never reached for valid month prefixes.
pub const CSV_DAILY: &str = "\
time_code,value
20200229,1.0
20200115,2.0
20201231,3.0
";

/// Mixed quality: padded header names, blanks, footnote markers, and an
/// unparseable time code.
pub const CSV_MESSY: &str = "\
 time_code , value ,note
202001,1.0,
202002,-,provisional
202003,   ,
notes,2.0,
2020,3.0,
202005,4.5,
";

/// Value column present under a different name.
pub const CSV_NO_VALUE_COLUMN: &str = "\
time_code,amount
202001,1.0
";

/// Every row fails one way or another.
pub const CSV_ALL_BAD: &str = "\
time_code,value
,1.0
abcd,2.0
202001,
202013,x
";

/// Japanese column headers, as a configured dataset would have them.
pub const CSV_JAPANESE_HEADERS: &str = "\
時間軸コード,地域,値
202301,全国,3.2
202302,全国,3.3
";

/// Build a `time_code,value` document with `valid` good rows followed by
/// `bad_values` rows whose value is not a number.
pub fn csv_with_bad_values(valid: usize, bad_values: usize) -> String {
    let mut out = String::from("time_code,value\n");
    for i in 0..valid {
        out.push_str(&format!("{}{:02},{}.5\n", 2000 + i / 12, i % 12 + 1, i));
    }
    for i in 0..bad_values {
        out.push_str(&format!("{}{:02},n/a\n", 2000 + i / 12, i % 12 + 1));
    }
    out
}

/// Lay out a catalog under `root`: two categories plus noise the catalog
/// must ignore (a stray file at the root, a hidden directory, a non-CSV file).
pub fn write_catalog(root: &std::path::Path) -> std::io::Result<()> {
    let prices = root.join("prices");
    let labour = root.join("labour");
    std::fs::create_dir_all(&prices)?;
    std::fs::create_dir_all(&labour)?;
    std::fs::create_dir_all(root.join(".cache"))?;

    std::fs::write(prices.join("cpi.csv"), CSV_MONTHLY)?;
    std::fs::write(prices.join("cgpi.CSV"), CSV_DAILY)?;
    std::fs::write(prices.join("readme.txt"), "not a dataset")?;
    std::fs::write(labour.join("unemployment.csv"), CSV_ANNUAL)?;
    std::fs::write(root.join("stray.csv"), CSV_ANNUAL)?;
    Ok(())
}
