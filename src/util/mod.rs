// SPDX-FileCopyrightText: The tagsmith authors
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod artwork;
