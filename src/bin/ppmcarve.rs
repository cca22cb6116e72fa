// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error, ResultExt};
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;

use ppmcarve::{
    calculate_energy, cq, energy_to_image, find_seam, read_pixmap, write_pixmap, Carver,
};

fn main() {
    let matches = App::new("ppmcarve")
        .version("0.1.0")
        .about("Content-aware shrinking for plain-text portable pixmaps")
        .arg(
            Arg::with_name("statistics")
                .short("s")
                .long("statistics")
                .help("Print the image's dimensions and mean brightness"),
        )
        .arg(
            Arg::with_name("show-min-path")
                .short("p")
                .long("show-min-path")
                .help("Print the cheapest seam's column indices, top row first"),
        )
        .arg(
            Arg::with_name("dump-energy")
                .short("e")
                .long("dump-energy")
                .help("Write the cumulative energy map to stdout as a binary graymap"),
        )
        .arg(
            Arg::with_name("steps")
                .short("n")
                .long("steps")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("How many seams to carve; out-of-range values mean all of them"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .default_value("out.ppm")
                .help("Where to write the carved pixmap"),
        )
        .arg(
            Arg::with_name("image")
                .help("The pixmap to carve")
                .required(true)
                .index(1),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("ppmcarve: {}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let path = matches.value_of("image").unwrap();
    let file = File::open(path).with_context(|e| format!("{}: {}", path, e))?;
    let mut grid =
        read_pixmap(BufReader::new(file)).with_context(|e| format!("{}: {}", path, e))?;

    if matches.is_present("statistics") {
        println!("width: {}", grid.width);
        println!("height: {}", grid.height);
        println!("brightness: {}", grid.brightness());
        return Ok(());
    }

    if matches.is_present("show-min-path") {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for column in find_seam(&grid, grid.width) {
            writeln!(out, "{}", column)?;
        }
        return Ok(());
    }

    if matches.is_present("dump-energy") {
        let map = calculate_energy(&grid, grid.width);
        let image = energy_to_image(&map);
        PNMEncoder::new(io::stdout())
            .with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary))
            .encode(
                &image.into_raw()[..],
                map.width,
                map.height,
                ColorType::Gray(8),
            )?;
        return Ok(());
    }

    let steps = match matches.value_of("steps") {
        Some(text) => text
            .parse::<i64>()
            .map_err(|_| err_msg(format!("not a seam count: {:?}", text)))?,
        None => -1,
    };
    // An absent, negative, or oversized count all mean "carve everything".
    let steps = cq!(
        steps < 0 || steps > i64::from(grid.width),
        grid.width,
        steps as u32
    );
    Carver::new(&mut grid).carve(steps);

    let output = matches.value_of("output").unwrap();
    let mut writer =
        BufWriter::new(File::create(output).with_context(|e| format!("{}: {}", output, e))?);
    write_pixmap(&mut writer, &grid).with_context(|e| format!("{}: {}", output, e))?;
    writer.flush()?;
    Ok(())
}
