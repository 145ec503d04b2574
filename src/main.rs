use clap::Parser;
use dialoguer::Confirm;
use image_gallery::{cli, config, error, logging, scanner, store, uploader};
use cli::{format_size, Cli, Commands};
use config::Config;
use error::{GalleryError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use store::{FileStorage, GalleryStore};
use uploader::{BatchUploader, UploadOptions};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    logging::init(&config.log_level, cli.verbose);

    let storage_dir = config.resolve_storage_dir()?;
    let storage = FileStorage::new(&storage_dir, config.quota_bytes.filter(|&q| q > 0));

    match cli.command {
        Commands::Upload { paths, no_delay } => {
            let mut gallery = GalleryStore::load(storage);

            println!("[1/2] ファイルを確認中...");
            let files = scanner::collect_files(&paths)?;
            let unreadable = files.iter().filter(|f| !f.is_readable()).count();
            if unreadable > 0 {
                println!("✔ {}件のファイルを検出（うち{}件は読み込めません）\n", files.len(), unreadable);
            } else {
                println!("✔ {}件のファイルを検出\n", files.len());
            }

            let options = if no_delay {
                UploadOptions { delay: std::time::Duration::ZERO }
            } else {
                config.upload_options()
            };
            let mut uploader = BatchUploader::new(options);

            println!("[2/2] エンコード中...");
            let bar = ProgressBar::new(100);
            bar.set_style(
                ProgressStyle::with_template("  [{bar:40.cyan/blue}] {pos:>3}%")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );

            let result = uploader
                .upload(&mut gallery, files, |percent| bar.set_position(percent.round() as u64))
                .await;
            bar.finish_and_clear();

            let report = match result {
                Ok(report) => report,
                Err(GalleryError::NoValidFiles { rejected }) => {
                    println!("✗ 有効な画像がありません");
                    for e in &rejected {
                        println!("  - [{}] {}", e.kind(), e);
                    }
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            for record in &report.added {
                println!("✔ {} ({}, {})", record.original_name, record.id, format_size(record.size_bytes));
            }
            for failure in &report.failures {
                println!("✗ [{}] {}", failure.kind, failure.reason);
            }

            if !report.added.is_empty() && !gallery.is_persisted() {
                println!("\n⚠ 保存に失敗しました（容量上限を確認してください）。今回の追加は次回起動時に失われます");
            }

            if report.is_complete() {
                println!("\n✅ {}件追加（合計{}件）", report.added.len(), gallery.len());
            } else {
                println!(
                    "\n⚠ {}件追加、{}件失敗（合計{}件）",
                    report.added.len(),
                    report.failures.len(),
                    gallery.len()
                );
            }
        }

        Commands::List { search } => {
            let gallery = GalleryStore::load(storage);
            let query = search.unwrap_or_default();
            let records = gallery.search(&query);

            if records.is_empty() {
                if query.is_empty() {
                    println!("画像がありません");
                } else {
                    println!("「{}」に一致する画像がありません", query);
                }
                return Ok(());
            }

            for record in &records {
                println!(
                    "{}  {:<30} {:>10}  {:<10}  {}",
                    record.id,
                    record.display_name,
                    format_size(record.size_bytes),
                    record.mime_type,
                    record.uploaded_at
                );
            }
            println!("\n{}件", records.len());
        }

        Commands::Delete { id, yes } => {
            let mut gallery = GalleryStore::load(storage);
            let name = match gallery.get(&id) {
                Some(record) => record.original_name.clone(),
                None => {
                    println!("画像が見つかりません: {}", id);
                    return Ok(());
                }
            };

            if !yes && !confirm(&format!("{} を削除しますか?", name))? {
                println!("キャンセルしました");
                return Ok(());
            }

            gallery.delete(&id);
            println!("✔ 削除しました: {}", name);
            if !gallery.is_persisted() {
                println!("⚠ 保存に失敗しました");
            }
        }

        Commands::Download { id, output } => {
            let gallery = GalleryStore::load(storage);
            let record = gallery
                .get(&id)
                .ok_or_else(|| GalleryError::RecordNotFound(id.clone()))?;

            let bytes = image_gallery_common::decode_data_uri(&record.content)?;
            let output_path = match output {
                Some(path) if path.is_dir() => path.join(&record.original_name),
                Some(path) => path,
                None => PathBuf::from(&record.original_name),
            };

            std::fs::write(&output_path, bytes)?;
            println!("✔ 書き出し: {}", output_path.display());
        }

        Commands::Clear { yes } => {
            let mut gallery = GalleryStore::load(storage);
            if gallery.is_empty() {
                println!("画像がありません");
                return Ok(());
            }

            if !yes && !confirm(&format!("{}件すべて削除しますか?", gallery.len()))? {
                println!("キャンセルしました");
                return Ok(());
            }

            let count = gallery.clear();
            println!("✔ {}件削除しました", count);
        }

        Commands::Stats => {
            let gallery = GalleryStore::load(storage);
            println!("統計:");
            println!("  件数: {}", gallery.len());
            println!("  合計サイズ: {}", format_size(gallery.total_size()));
            println!("  保存先: {}", storage_dir.display());
        }

        Commands::Config { show, set_quota, set_delay, set_storage_dir } => {
            let mut config = config;
            let changed = set_quota.is_some() || set_delay.is_some() || set_storage_dir.is_some();

            if let Some(quota) = set_quota {
                config.quota_bytes = if quota == 0 { None } else { Some(quota) };
            }
            if let Some(delay) = set_delay {
                config.upload_delay_ms = delay;
            }
            if let Some(dir) = set_storage_dir {
                config.storage_dir = Some(dir);
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  保存先: {}", config.resolve_storage_dir()?.display());
                println!(
                    "  容量上限: {}",
                    config.quota_bytes.map(format_size).unwrap_or_else(|| "無制限".into())
                );
                println!("  待機時間: {}ms", config.upload_delay_ms);
                println!("  ログレベル: {}", config.log_level);
            }
        }
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| GalleryError::Prompt(e.to_string()))
}
