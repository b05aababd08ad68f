use std::env::args;
use std::fs::write;
use std::time::Instant;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use rgb::ComponentBytes;
use sketchpen::*;

fn save(canvas: &Canvas, png_name: &str) {
	let (w, h) = (canvas.width(), canvas.height());
	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(canvas.pixels().as_bytes()).unwrap();
	}
	write(png_name, &png_buf).unwrap();
}

fn main() {
	let prefix = args().nth(1).unwrap_or("sketchpen".into());
	let depth = args().nth(2).and_then(|d| d.parse().ok()).unwrap_or(3);
	let (w, h) = (400, 400);
	let mut canvas = Canvas::new(w, h);

	let now = Instant::now();
	island(&mut canvas, 200.0, depth, 0).unwrap();
	println!("island drawn in {}ms.", now.elapsed().as_millis());
	save(&canvas, &format!("{}-island.png", &prefix));

	let now = Instant::now();
	sierpinski(&mut canvas, 200.0, depth + 2, 0).unwrap();
	println!("sierpinski drawn in {}ms.", now.elapsed().as_millis());
	save(&canvas, &format!("{}-sierpinski.png", &prefix));

	rosette(&mut canvas, 80.0, 10, 5, 0).unwrap();
	save(&canvas, &format!("{}-rosette.png", &prefix));
}
