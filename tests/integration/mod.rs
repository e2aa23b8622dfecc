// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod document_flow_test;
pub mod health_check;
pub mod helpers;
