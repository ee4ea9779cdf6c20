#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use music_selection::MpdConnectionConfig;

pub const GREETING: &str = "OK MPD 0.23.5\n";

/// One expected request and the raw reply (without the final `OK`).
pub struct Exchange {
    pub request: &'static str,
    pub reply: String,
}

pub fn exchange(request: &'static str, reply: &str) -> Exchange {
    Exchange {
        request,
        reply: reply.to_string(),
    }
}

/// Serves a single connection, answering the scripted exchanges in order.
///
/// Unexpected requests are answered with an `ACK`. The handle yields every
/// request received.
pub fn serve(
    greeting: &str,
    script: Vec<Exchange>,
) -> (MpdConnectionConfig, JoinHandle<Vec<String>>) {
    // Bind a random port so tests can run in parallel.
    let server = TcpListener::bind(("127.0.0.1", 0)).expect("Failed to bind");
    let port = server.local_addr().unwrap().port();
    let greeting = greeting.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = server.accept().unwrap();
        stream.write_all(greeting.as_bytes()).unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut received = Vec::new();
        for exchange in script {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 {
                break;
            }
            let request = line.trim_end().to_string();
            let response = if request == exchange.request {
                let mut reply = exchange.reply.clone();
                if !reply.is_empty() && !reply.ends_with('\n') {
                    reply.push('\n');
                }
                if !reply.starts_with("ACK") {
                    reply.push_str("OK\n");
                }
                reply
            } else {
                format!("ACK [5@0] {{}} unexpected request '{request}'\n")
            };
            received.push(request);
            if stream.write_all(response.as_bytes()).is_err() {
                break;
            }
        }
        received
    });

    (MpdConnectionConfig::new("127.0.0.1", port), handle)
}

pub const LIBRARY: &str = "directory: Queen
file: Queen/Jazz/01.flac
AlbumArtist: Queen
Album: Jazz
Title: Mustapha
Track: 1/13
file: Queen/Jazz/02.flac
AlbumArtist: Queen
Album: Jazz
Title: Fat Bottomed Girls
Track: 2/13
directory: Rush
file: Rush/2112/01.flac
AlbumArtist: Rush
Album: 2112
Title: 2112
Track: 1";

pub const JAZZ: &str = "file: Queen/Jazz/01.flac
AlbumArtist: Queen
Album: Jazz
Title: Mustapha
Track: 1/13
file: Queen/Jazz/02.flac
AlbumArtist: Queen
Album: Jazz
Title: Fat Bottomed Girls
Track: 2/13";
