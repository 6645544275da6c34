use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::error::Error;
use std::path::PathBuf;
use locpkt_rust::locpkt_common_rs::packet::codec::PacketCodec;
use locpkt_rust::locpkt_common_rs::packet::core::{is_host_big_endian, DecodeError, LocPacketError, LocResult};
use locpkt_rust::locpkt_common_rs::packet::debug::{hex_dump, PacketDebugLogger};
use locpkt_rust::locpkt_common_rs::packet::types::{DecodedLocation, LocationType};
use locpkt_rust::locpkt_common_rs::utils::config_loader::{ConfigLoader, LocPacketConfig, OutputConfig, OutputFormat};
use locpkt_rust::locpkt_common_rs::utils::log_config::{init_logging, LogLevel};

#[derive(Parser)]
#[command(name = "locpkt")]
#[command(about = "Location Packet Tool - 位置情報パケットのデコード")]
#[command(version = "0.1.0")]
struct Cli {
    /// 設定ファイル（TOML / JSON）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// デバッグモード（パケットのフィールドダンプを表示）
    #[arg(short, long)]
    debug: bool,

    /// JSON形式で出力
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 16進文字列のパケットをデコード
    Decode {
        /// パケット（例: "AA 55 01 04 7E 1F 42 81 14 E9 42 E7"）
        #[arg(required = true)]
        packets: Vec<String>,
    },
    /// 座標からパケットを生成
    Encode {
        /// 位置タイプ（current / home）
        #[arg(short = 't', long = "type", default_value = "current")]
        location_type: LocationType,

        /// 緯度
        #[arg(long, allow_hyphen_values = true)]
        lat: f32,

        /// 経度
        #[arg(long, allow_hyphen_values = true)]
        lon: f32,
    },
    /// 組み込みのテストパケットをデコード
    Demo,
}

/// 組み込みパケットの座標部（北京付近、チェックサムは生成時に計算）
const DEMO_BODY: [u8; 8] = [0x04, 0x7E, 0x1F, 0x42, 0x81, 0x14, 0xE9, 0x42];

fn demo_packet(location_type: LocationType) -> [u8; 12] {
    let mut packet = [0u8; 12];
    packet[0] = 0xAA;
    packet[1] = 0x55;
    packet[2] = location_type.as_u8();
    packet[3..11].copy_from_slice(&DEMO_BODY);
    packet[11] = PacketCodec::checksum(&packet[..11]);
    packet
}

/// 16進文字列を解析（空白・","・":"・"-" 区切りと "0x" 接頭辞を許容、区切りなしの "0xAA0x55" も可）
fn parse_hex_packet(input: &str) -> LocResult<Vec<u8>> {
    let cleaned: String = input
        .split(|c: char| c.is_whitespace() || c == ':' || c == '-' || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.replace("0x", "").replace("0X", ""))
        .collect();
    if cleaned.is_empty() {
        return Err(LocPacketError::InvalidInput("empty packet".into()));
    }
    Ok(hex::decode(cleaned)?)
}

fn location_json(location: &DecodedLocation, raw: &[u8], output: &OutputConfig) -> serde_json::Value {
    let mut value = serde_json::json!({ "ok": true, "location": location });
    if output.show_raw {
        value["raw"] = serde_json::Value::String(hex_dump(raw));
    }
    value
}

fn failure_json(err: &LocPacketError, raw: Option<&[u8]>, output: &OutputConfig) -> serde_json::Value {
    let mut value = serde_json::json!({ "ok": false, "error": err.to_string() });
    if let (true, Some(raw)) = (output.show_raw, raw) {
        value["raw"] = serde_json::Value::String(hex_dump(raw));
    }
    value
}

fn location_text(location: &DecodedLocation, raw: &[u8], output: &OutputConfig) -> Vec<String> {
    let mut lines = Vec::new();
    if output.show_raw {
        lines.push(format!("パケット: {}", hex_dump(raw)));
    }
    lines.push("✅ 解析成功:".to_string());
    lines.push(format!("タイプ: {}", location.location_type));
    lines.push(format!("緯度: {:.*}", output.precision, location.latitude));
    lines.push(format!("経度: {:.*}", output.precision, location.longitude));
    lines
}

fn print_location(location: &DecodedLocation, raw: &[u8], output: &OutputConfig) {
    match output.format {
        OutputFormat::Json => println!("{}", location_json(location, raw, output)),
        OutputFormat::Text => {
            for line in location_text(location, raw, output) {
                println!("{}", line);
            }
        }
    }
}

fn print_failure(err: &LocPacketError, raw: Option<&[u8]>, output: &OutputConfig) {
    match output.format {
        OutputFormat::Json => println!("{}", failure_json(err, raw, output)),
        OutputFormat::Text => {
            println!("❌ {}", err);
            println!("パケット解析失敗");
        }
    }
}

/// 1パケットを処理し、成功したかを返す
fn process_received_data(input: &str, output: &OutputConfig, debug_dump: bool) -> bool {
    let raw = match parse_hex_packet(input) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("invalid packet input {:?}: {}", input, e);
            print_failure(&e, None, output);
            return false;
        }
    };
    if debug_dump {
        PacketDebugLogger::log_packet(&raw);
    }
    process_bytes(&raw, output)
}

fn process_bytes(raw: &[u8], output: &OutputConfig) -> bool {
    match PacketCodec::decode(raw) {
        Ok(location) => {
            debug!("decoded {:?}", location);
            print_location(&location, raw, output);
            true
        }
        Err(e) => {
            log_decode_failure(&e);
            print_failure(&LocPacketError::from(e), Some(raw), output);
            false
        }
    }
}

fn log_decode_failure(err: &DecodeError) {
    match err {
        DecodeError::ChecksumMismatch { .. } => warn!("corrupted packet: {}", err),
        _ => info!("rejected packet: {}", err),
    }
}

fn load_config(cli: &Cli) -> LocResult<LocPacketConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_explicit_path(path.clone()),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.debug {
        config.logging.level = "debug".into();
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(if cli.debug { LogLevel::Debug } else { config.log_level() });

    let output = &config.output;
    match &cli.command {
        Commands::Decode { packets } => {
            let failed = packets
                .iter()
                .filter(|packet| !process_received_data(packet, output, cli.debug))
                .count();
            if failed > 0 {
                info!("{}/{} packets failed to decode", failed, packets.len());
                std::process::exit(1);
            }
        }

        Commands::Encode { location_type, lat, lon } => {
            let packet = PacketCodec::encode(&DecodedLocation::new(*location_type, *lat, *lon));
            match output.format {
                OutputFormat::Json => println!("{}", serde_json::json!({ "packet": hex_dump(&packet) })),
                OutputFormat::Text => println!("{}", hex_dump(&packet)),
            }
        }

        Commands::Demo => {
            println!(
                "システムのバイトオーダー: {}",
                if is_host_big_endian() { "ビッグエンディアン" } else { "リトルエンディアン" }
            );
            for (index, location_type) in [LocationType::Current, LocationType::Home].into_iter().enumerate() {
                let packet = demo_packet(location_type);
                println!("\nテスト {} - {}パケット:", index + 1, location_type);
                if cli.debug {
                    PacketDebugLogger::log_packet(&packet);
                }
                process_bytes(&packet, output);
            }
        }
    }

    Ok(())
}
