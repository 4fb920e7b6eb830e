// SPDX-License-Identifier: AGPL-3.0-or-later

//! Benchmark the performance of encoding and decoding data entry operations.
//!
//! Operations with and without a source account are encoded and decoded for varying value sizes
//! and throughput is measured.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ed25519_dalek::Keypair;
use paydex_base::identity::AccountId;
use paydex_base::operation::decode::decode_encoded_operation;
use paydex_base::operation::encode::encode_operation;
use paydex_base::operation::{EncodedOperation, ManageDataOperation, Operation};
use rand::rngs::OsRng;
use rand::{thread_rng, Rng};

/// Encode a data entry operation given some value.
fn run_encode(value: &[u8], source: Option<AccountId>) -> EncodedOperation {
    let manage_data = ManageDataOperation::new("benchmark", Some(value.to_vec())).unwrap();
    encode_operation(&Operation::new(manage_data, source)).unwrap()
}

/// Decode an operation from its wire encoding.
fn run_decode(encoded_operation: &EncodedOperation) -> Operation {
    decode_encoded_operation(encoded_operation).unwrap()
}

/// Construct random bytes given a size.
fn random_bytes(size: usize) -> Vec<u8> {
    let mut rng = thread_rng();
    (0..size).map(|_| rng.gen::<u8>()).collect()
}

fn get_benchmark_id(function_name: &str, size: &usize, source: &Option<AccountId>) -> BenchmarkId {
    let benchmark_parameter = match source {
        Some(_) => format!("{} B with source", size),
        None => format!("{} B", size),
    };
    BenchmarkId::new(function_name, benchmark_parameter)
}

fn criterion_benchmark(c: &mut Criterion) {
    let key_pair = Keypair::generate(&mut OsRng);
    let sources = [None, Some(AccountId::from(&key_pair.public))];

    let mut encode_decode = c.benchmark_group("manage data operation");

    // Test encoding performance for a range of value sizes
    for source in sources.iter() {
        for size in [0, 1, 16, 33, 64].iter() {
            let value = random_bytes(*size);

            encode_decode.throughput(Throughput::Bytes(*size as u64));
            encode_decode.bench_with_input(
                get_benchmark_id("encode", size, source),
                size,
                |b, &_size| b.iter(|| run_encode(&value, *source)),
            );
        }
    }

    // Test decoding performance for a range of value sizes
    for source in sources.iter() {
        for size in [0, 1, 16, 33, 64].iter() {
            let encoded_operation = run_encode(&random_bytes(*size), *source);

            encode_decode.throughput(Throughput::Bytes(*size as u64));
            encode_decode.bench_with_input(
                get_benchmark_id("decode", size, source),
                size,
                |b, &_size| b.iter(|| run_decode(&encoded_operation)),
            );
        }
    }

    encode_decode.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
